use std::collections::HashSet;

use folio_api::{
    section::{PAGE_SECTIONS, SectionId},
    site::Site,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    carousel::SWIPE_THRESHOLD, parallax::PARALLAX_FACTOR, reveal::RevealOptions,
    scroll_spy::LOOKAHEAD, typewriter::TypewriterConfig,
};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("navigation lists section {0} twice")]
    DuplicateNav(SectionId),
    #[error("section {0} is not rendered on the page")]
    UnknownSection(SectionId),
    #[error("invalid effect setting {name}: {reason}")]
    InvalidEffect {
        name: &'static str,
        reason: &'static str,
    },
}

// site configuration
//
// the whole page is described by a single toml document embedded into the
// webapp: a [site] table with the content and an optional [effects] table with
// the tunables for the scroll and animation behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: Site,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub scroll_spy: ScrollSpyConfig,
    pub reveal: RevealOptions,
    pub parallax_factor: f64,
    pub swipe_threshold: f64,
    pub typewriter: TypewriterConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            scroll_spy: ScrollSpyConfig::default(),
            reveal: RevealOptions::default(),
            parallax_factor: PARALLAX_FACTOR,
            swipe_threshold: SWIPE_THRESHOLD,
            typewriter: TypewriterConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    pub lookahead: f64,
    // reported while no section has been reached yet
    pub fallback: SectionId,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        ScrollSpyConfig {
            lookahead: LOOKAHEAD,
            fallback: SectionId::from(folio_api::section::ABOUT),
        }
    }
}

#[instrument(level = "debug", skip(doc))]
pub fn parse_config(doc: &str) -> Result<SiteConfig, ContentError> {
    debug!("parsing site config");

    let config: SiteConfig = toml::from_str(doc)?;
    config.validate()?;

    debug!(
        {
            slides = config.site.projects.len(),
            experience = config.site.experience.len()
        },
        "site config ok"
    );
    Ok(config)
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for entry in self.site.nav.iter() {
            if !PAGE_SECTIONS.contains(&entry.target.as_str()) {
                return Err(ContentError::UnknownSection(entry.target.clone()));
            }
            if !seen.insert(entry.target.as_str()) {
                return Err(ContentError::DuplicateNav(entry.target.clone()));
            }
        }

        if !PAGE_SECTIONS.contains(&self.effects.scroll_spy.fallback.as_str()) {
            return Err(ContentError::UnknownSection(
                self.effects.scroll_spy.fallback.clone(),
            ));
        }

        self.effects.validate()
    }
}

impl EffectsConfig {
    fn validate(&self) -> Result<(), ContentError> {
        let invalid = |name, reason| Err(ContentError::InvalidEffect { name, reason });

        if !self.scroll_spy.lookahead.is_finite() || self.scroll_spy.lookahead < 0.0 {
            return invalid("scroll_spy.lookahead", "must be a non-negative number");
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return invalid("reveal.threshold", "must be in (0, 1]");
        }
        if !self.reveal.bottom_margin.is_finite() {
            return invalid("reveal.bottom_margin", "must be a number");
        }
        if !self.parallax_factor.is_finite() {
            return invalid("parallax_factor", "must be a number");
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return invalid("swipe_threshold", "must be positive");
        }
        if self.typewriter.speed_ms == 0 {
            return invalid("typewriter.speed_ms", "must be positive");
        }

        Ok(())
    }
}

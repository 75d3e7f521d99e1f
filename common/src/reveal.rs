// fade-in on scroll
//
// the browser's intersection observer does the geometry, including the
// threshold; the first entry reported as intersecting flips the element to
// visible.  the flip is one-way, an element scrolled back out of view stays
// revealed

use serde::{Deserialize, Serialize};

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    // fraction of the element that must be visible before the observer reports
    pub threshold: f64,
    // how far the bottom of the viewport is pulled in, in pixels
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

impl RevealOptions {
    // root margin in css shorthand, as IntersectionObserverInit expects it
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", 0.0 - self.bottom_margin)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn revealed() -> Self {
        Reveal { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // feed one observer entry; returns true only on the hidden -> visible edge
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }

        self.visible = true;
        true
    }

    pub fn class(&self) -> &'static str {
        if self.visible { "visible" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_shrinks_bottom() {
        assert_eq!(RevealOptions::default().root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn first_intersecting_entry_reveals() {
        let mut reveal = Reveal::default();

        assert!(reveal.observe(true));
        assert!(reveal.is_visible());
        assert!(!reveal.observe(true));
    }

    #[test]
    fn never_reverts() {
        let mut reveal = Reveal::default();

        reveal.observe(true);
        assert!(!reveal.observe(false));
        assert!(reveal.is_visible());
        assert_eq!(reveal.class(), "visible");
    }

    #[test]
    fn ignores_non_intersecting_reports() {
        let mut reveal = Reveal::default();

        assert!(!reveal.observe(false));
        assert_eq!(reveal.class(), "");
    }
}

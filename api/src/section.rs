use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

// ids of the sections the page renders, in document order
pub const ABOUT: &str = "about";
pub const EXPERIENCE: &str = "experience";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const ORGANIZATIONS: &str = "organizations";
pub const CONTACT: &str = "contact";

pub const PAGE_SECTIONS: [&str; 6] = [ABOUT, EXPERIENCE, PROJECTS, SKILLS, ORGANIZATIONS, CONTACT];

// section identifiers
//
// these are the string keys used both as html ids on the page sections and as
// navigation targets in the header, e.g. "about" or "projects"
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // fragment used by in-page anchors
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        SectionId(id)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// one header link
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub target: SectionId,
    pub label: String,
}

use serde::{Deserialize, Serialize};

use crate::AssetRef;

// hero block at the top of the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    // typed out character by character
    pub role: String,
    pub bio: Vec<String>,
    pub portrait: AssetRef,
    pub resume: Option<AssetRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub period: String,
    pub summary: String,
    // the detail view shows these paragraphs in place of the summary
    #[serde(default)]
    pub details: Vec<String>,
    pub image: Option<AssetRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    // icon font class, e.g. "fas fa-code"
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<AssetRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub href: String,
    pub label: String,
    pub icon: String,
    // opened in a new tab
    #[serde(default)]
    pub external: bool,
}

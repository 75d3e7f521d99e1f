use serde::{Deserialize, Serialize};

use crate::{
    profile::{ContactLink, ExperienceEntry, Organization, Profile, Skill},
    project::Slide,
    section::NavEntry,
};

// everything rendered on the page
//
// the order of the vectors is the order things appear in; nothing here is
// mutated after startup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub profile: Profile,
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Slide>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    pub footer: String,
}

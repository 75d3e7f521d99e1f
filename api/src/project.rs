use serde::{Deserialize, Serialize};

use crate::AssetRef;

// one carousel slide
//
// the hero image is shown large at the top of the card, thumbnails are laid out
// in a small gallery underneath the description.  all of them open the lightbox
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub hero: AssetRef,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnails: Vec<AssetRef>,
}

pub mod profile;
pub mod project;
pub mod section;
pub mod site;

// asset references
//
// image and document paths are opaque to everything in the workspace; they are
// handed to the browser as-is
pub type AssetRef = String;

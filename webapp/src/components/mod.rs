pub mod footer;
pub mod lightbox;
pub mod navigation;

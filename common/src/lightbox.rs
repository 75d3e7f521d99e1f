use folio_api::AssetRef;
use tracing::debug;

// where a click inside the open lightbox landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxClick {
    // the dimmed area around the picture
    Backdrop,
    // the picture itself
    Image,
    // the close button
    Dismiss,
}

// image lightbox
//
// closed until an image is clicked, then shows that image until the dismiss
// control or the backdrop is clicked.  the page behind it must not scroll while
// it is open, see scroll_locked()
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    image: Option<AssetRef>,
}

impl Lightbox {
    pub fn image(&self) -> Option<&AssetRef> {
        self.image.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn open(&mut self, image: impl Into<AssetRef>) {
        let image = image.into();
        debug!({ image = %image }, "opening lightbox");
        self.image = Some(image);
    }

    pub fn close(&mut self) {
        if self.image.take().is_some() {
            debug!("closing lightbox");
        }
    }

    // returns true if the click closed the lightbox
    pub fn click(&mut self, target: LightboxClick) -> bool {
        match target {
            LightboxClick::Image => false,
            LightboxClick::Backdrop | LightboxClick::Dismiss => {
                let was_open = self.is_open();
                self.close();
                was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
        assert_eq!(lightbox.image(), None);
    }

    #[test]
    fn backdrop_click_closes_and_unlocks_scroll() {
        let mut lightbox = Lightbox::default();
        lightbox.open("x.png");
        assert!(lightbox.scroll_locked());
        assert_eq!(lightbox.image().map(String::as_str), Some("x.png"));

        assert!(lightbox.click(LightboxClick::Backdrop));
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn image_click_keeps_it_open() {
        let mut lightbox = Lightbox::default();
        lightbox.open("x.png");

        assert!(!lightbox.click(LightboxClick::Image));
        assert!(lightbox.is_open());
    }

    #[test]
    fn dismiss_closes() {
        let mut lightbox = Lightbox::default();
        lightbox.open("x.png");
        assert!(lightbox.click(LightboxClick::Dismiss));
        assert!(!lightbox.click(LightboxClick::Dismiss));
    }

    #[test]
    fn reopening_swaps_image() {
        let mut lightbox = Lightbox::default();
        lightbox.open("a.png");
        lightbox.open("b.png");
        assert_eq!(lightbox.image().map(String::as_str), Some("b.png"));
    }
}

// mobile navigation menu
//
// the hamburger toggles the menu; following a link or clicking anywhere outside
// the menu and the hamburger closes it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn document_click(&mut self, in_menu: bool, in_toggle: bool) {
        if !in_menu && !in_toggle {
            self.close();
        }
    }

    pub fn class(&self) -> &'static str {
        if self.open { "active" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "active");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = NavMenu::default();
        menu.toggle();

        menu.document_click(true, false);
        assert!(menu.is_open());
        menu.document_click(false, true);
        assert!(menu.is_open());

        menu.document_click(false, false);
        assert!(!menu.is_open());
    }
}

use tracing::debug;

// what the caller should do after an input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewChange {
    Unchanged,
    // the view switched, scroll the container back into view
    ScrollIntoView,
}

// experience list/detail toggle
//
// the list is the default view; selecting an entry shows its details until the
// back action or escape returns to the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceView {
    len: usize,
    selected: Option<usize>,
}

impl ExperienceView {
    pub fn new(len: usize) -> Self {
        ExperienceView {
            len,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }

    // indexes past the end of the list are ignored
    pub fn select(&mut self, index: usize) -> ViewChange {
        if index >= self.len || self.selected == Some(index) {
            return ViewChange::Unchanged;
        }

        debug!({ index = index }, "showing experience detail");
        self.selected = Some(index);
        ViewChange::ScrollIntoView
    }

    pub fn back(&mut self) -> ViewChange {
        match self.selected.take() {
            Some(_) => {
                debug!("back to experience list");
                ViewChange::ScrollIntoView
            }
            None => ViewChange::Unchanged,
        }
    }

    // escape only means something while a detail is shown, and an open
    // lightbox takes it first
    pub fn escape(&mut self, lightbox_open: bool) -> ViewChange {
        if lightbox_open {
            return ViewChange::Unchanged;
        }

        self.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_list() {
        let view = ExperienceView::new(3);
        assert!(!view.is_detail());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn select_shows_detail_and_scrolls() {
        let mut view = ExperienceView::new(3);
        assert_eq!(view.select(1), ViewChange::ScrollIntoView);
        assert_eq!(view.selected(), Some(1));
        assert_eq!(view.select(1), ViewChange::Unchanged);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut view = ExperienceView::new(2);
        assert_eq!(view.select(2), ViewChange::Unchanged);
        assert!(!view.is_detail());
    }

    #[test]
    fn back_returns_to_list() {
        let mut view = ExperienceView::new(2);
        view.select(0);
        assert_eq!(view.back(), ViewChange::ScrollIntoView);
        assert!(!view.is_detail());
        assert_eq!(view.back(), ViewChange::Unchanged);
    }

    #[test]
    fn escape_in_list_view_does_nothing() {
        let mut view = ExperienceView::new(2);
        assert_eq!(view.escape(false), ViewChange::Unchanged);

        view.select(1);
        assert_eq!(view.escape(false), ViewChange::ScrollIntoView);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn escape_with_lightbox_open_keeps_detail() {
        let mut view = ExperienceView::new(2);
        view.select(1);

        assert_eq!(view.escape(true), ViewChange::Unchanged);
        assert_eq!(view.selected(), Some(1));

        assert_eq!(view.escape(false), ViewChange::ScrollIntoView);
        assert!(!view.is_detail());
    }
}

use folio_api::section::SectionId;
use tracing::debug;

// sections activate this many pixels before their top reaches the viewport top
pub const LOOKAHEAD: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
struct Registered {
    id: SectionId,
    top: f64,
    // registration order, used to break ties between equal tops
    seq: u64,
}

// active-section tracker
//
// page sections register their id and top offset when they mount and
// deregister when they unmount.  the active section is the last one, in
// layout order, whose top minus the lookahead is at or above the scroll
// position; when none qualifies the fallback is reported instead.
//
// layout order is taken to be ascending top, so the list is kept sorted by
// top.  overlapping sections with identical tops resolve to whichever
// registered last
#[derive(Clone, Debug)]
pub struct SectionTracker {
    lookahead: f64,
    fallback: SectionId,
    sections: Vec<Registered>,
    next_seq: u64,
}

impl SectionTracker {
    pub fn new(fallback: impl Into<SectionId>) -> Self {
        SectionTracker::with_lookahead(fallback, LOOKAHEAD)
    }

    pub fn with_lookahead(fallback: impl Into<SectionId>, lookahead: f64) -> Self {
        SectionTracker {
            lookahead,
            fallback: fallback.into(),
            sections: Vec::new(),
            next_seq: 0,
        }
    }

    // registering an id that is already present replaces its boundary
    pub fn register(&mut self, id: impl Into<SectionId>, top: f64) {
        let id = id.into();
        debug!({ section = %id, top = top }, "registering section");

        self.sections.retain(|s| s.id != id);
        self.sections.push(Registered {
            id,
            top,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.sort();
    }

    pub fn deregister(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id.as_str() != id);
        before != self.sections.len()
    }

    // re-read every boundary from the live layout.  sections the closure
    // cannot measure keep their previous top
    pub fn remeasure(&mut self, mut measure: impl FnMut(&SectionId) -> Option<f64>) {
        for section in self.sections.iter_mut() {
            if let Some(top) = measure(&section.id) {
                section.top = top;
            }
        }
        self.sort();
    }

    pub fn active(&self, scroll_y: f64) -> &SectionId {
        let mut current = None;
        for section in self.sections.iter() {
            if scroll_y >= section.top - self.lookahead {
                current = Some(&section.id);
            }
        }

        current.unwrap_or(&self.fallback)
    }

    fn sort(&mut self) {
        self.sections.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.seq.cmp(&b.seq)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> SectionTracker {
        let mut tracker = SectionTracker::new("about");
        tracker.register("about", 0.0);
        tracker.register("experience", 800.0);
        tracker.register("projects", 1600.0);
        tracker
    }

    #[test]
    fn picks_section_inside_lookahead() {
        assert_eq!(page().active(850.0).as_str(), "experience");
    }

    #[test]
    fn top_of_page_is_first_section() {
        assert_eq!(page().active(0.0).as_str(), "about");
    }

    #[test]
    fn lookahead_activates_early() {
        let tracker = page();
        assert_eq!(tracker.active(599.0).as_str(), "about");
        assert_eq!(tracker.active(600.0).as_str(), "experience");
        assert_eq!(tracker.active(1400.0).as_str(), "projects");
    }

    #[test]
    fn falls_back_when_nothing_qualifies() {
        let mut tracker = SectionTracker::new("about");
        assert_eq!(tracker.active(500.0).as_str(), "about");

        tracker.register("projects", 2000.0);
        assert_eq!(tracker.active(10.0).as_str(), "about");
    }

    #[test]
    fn registration_order_does_not_matter() {
        let mut tracker = SectionTracker::new("about");
        tracker.register("projects", 1600.0);
        tracker.register("about", 0.0);
        tracker.register("experience", 800.0);
        assert_eq!(tracker.active(850.0).as_str(), "experience");
    }

    #[test]
    fn deregistered_sections_are_skipped() {
        let mut tracker = page();
        assert!(tracker.deregister("experience"));
        assert!(!tracker.deregister("experience"));
        assert_eq!(tracker.active(850.0).as_str(), "about");
    }

    #[test]
    fn reregistering_replaces_boundary() {
        let mut tracker = page();
        tracker.register("experience", 3000.0);
        assert_eq!(tracker.active(1500.0).as_str(), "projects");
    }

    #[test]
    fn remeasure_keeps_unmeasured_tops() {
        let mut tracker = page();
        tracker.remeasure(|id| (id.as_str() == "projects").then_some(900.0));
        assert_eq!(tracker.active(850.0).as_str(), "projects");
    }

    #[test]
    fn remeasure_follows_layout_changes() {
        let mut tracker = page();

        // experience shrank to its detail view, pulling projects up
        let layout = [("about", 0.0), ("experience", 800.0), ("projects", 1000.0)];
        let measure = |id: &SectionId| {
            layout
                .iter()
                .find(|(name, _)| *name == id.as_str())
                .map(|(_, top)| *top)
        };

        assert_eq!(tracker.active(900.0).as_str(), "experience");
        tracker.remeasure(measure);
        assert_eq!(tracker.active(900.0).as_str(), "projects");
        assert_eq!(tracker.active(750.0).as_str(), "experience");
    }

    #[test]
    fn equal_tops_resolve_to_latest_registration() {
        let mut tracker = SectionTracker::new("about");
        tracker.register("a", 100.0);
        tracker.register("b", 100.0);
        assert_eq!(tracker.active(100.0).as_str(), "b");
    }

    proptest! {
        #[test]
        fn active_is_last_qualifying(mut tops in prop::collection::vec(0.0f64..10_000.0, 1..12), scroll in 0.0f64..12_000.0) {
            tops.sort_by(f64::total_cmp);
            let mut tracker = SectionTracker::new("fallback");
            for (i, top) in tops.iter().enumerate() {
                tracker.register(format!("s{i}"), *top);
            }

            let expected = tops
                .iter()
                .enumerate()
                .filter(|(_, top)| scroll >= *top - LOOKAHEAD)
                .map(|(i, _)| format!("s{i}"))
                .last()
                .unwrap_or_else(|| "fallback".to_owned());

            prop_assert_eq!(tracker.active(scroll).as_str(), expected.as_str());
        }
    }
}

use tracing::debug;

// horizontal distance a touch has to travel before it counts as a swipe
pub const SWIPE_THRESHOLD: f64 = 50.0;

// carousel position
//
// the index is clamped into [0, total) by every operation, so the view can
// derive the strip offset and the button states from it without checks.  an
// empty carousel pins the index to 0 and disables both directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Carousel { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.last());
        debug!({ index = self.index }, "carousel next");
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
        debug!({ index = self.index }, "carousel prev");
    }

    // out-of-range targets are clamped rather than rejected
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.last());
        debug!({ index = self.index }, "carousel go_to");
    }

    pub fn navigate(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Forward => self.next(),
            SwipeDirection::Backward => self.prev(),
        }
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.total > 0 && self.index < self.last()
    }

    // offset of the slide strip, in percent of one slide width
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    // one marker per slide, true for the active one
    pub fn markers(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.total).map(move |i| (i, i == self.index))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    // finger moved left, show the next slide
    Forward,
    // finger moved right, show the previous slide
    Backward,
}

// swipe recognizer
//
// touchstart records the horizontal screen coordinate, touchend compares.  a
// gesture resolves at most once; an end without a start is ignored
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    threshold: f64,
    start_x: Option<f64>,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        SwipeGesture::new(SWIPE_THRESHOLD)
    }
}

impl SwipeGesture {
    pub fn new(threshold: f64) -> Self {
        SwipeGesture {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;

        if delta <= -self.threshold {
            Some(SwipeDirection::Forward)
        } else if delta >= self.threshold {
            Some(SwipeDirection::Backward)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_first_slide() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_prev());
        assert!(carousel.can_next());
    }

    #[test]
    fn next_is_idempotent_at_last_slide() {
        let mut carousel = Carousel::new(5);
        carousel.go_to(4);
        carousel.next();
        assert_eq!(carousel.index(), 4);
        assert!(!carousel.can_next());
    }

    #[test]
    fn prev_is_idempotent_at_first_slide() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(17);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.go_to(3);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_next());
        assert!(!carousel.can_prev());
        assert_eq!(carousel.markers().count(), 0);
    }

    #[test]
    fn single_slide_disables_both_buttons() {
        let carousel = Carousel::new(1);
        assert!(!carousel.can_prev());
        assert!(!carousel.can_next());
    }

    #[test]
    fn transform_translates_strip() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.transform(), "translateX(0%)");
        carousel.go_to(2);
        assert_eq!(carousel.transform(), "translateX(-200%)");
    }

    #[test]
    fn markers_flag_active_slide() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        let markers: Vec<_> = carousel.markers().collect();
        assert_eq!(markers, [(0, false), (1, true), (2, false)]);
    }

    #[test]
    fn swipe_left_past_threshold_goes_forward() {
        let mut swipe = SwipeGesture::default();
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(200.0), Some(SwipeDirection::Forward));
    }

    #[test]
    fn swipe_inside_dead_zone_is_ignored() {
        let mut swipe = SwipeGesture::default();
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(280.0), None);
    }

    #[test]
    fn swipe_right_goes_backward() {
        let mut swipe = SwipeGesture::default();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(150.0), Some(SwipeDirection::Backward));
    }

    #[test]
    fn swipe_threshold_is_inclusive() {
        let mut swipe = SwipeGesture::default();
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), Some(SwipeDirection::Forward));
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(251.0), None);
    }

    #[test]
    fn swipe_resolves_once() {
        let mut swipe = SwipeGesture::default();
        swipe.touch_start(300.0);
        assert!(swipe.touch_end(100.0).is_some());
        assert_eq!(swipe.touch_end(100.0), None);
    }

    #[test]
    fn swipe_moves_carousel_exactly_once() {
        let mut carousel = Carousel::new(5);
        let mut swipe = SwipeGesture::default();

        swipe.touch_start(300.0);
        if let Some(direction) = swipe.touch_end(200.0) {
            carousel.navigate(direction);
        }

        assert_eq!(carousel.index(), 1);
    }

    fn carousel_at() -> impl Strategy<Value = Carousel> {
        (1usize..32).prop_flat_map(|total| {
            (0..total).prop_map(move |index| {
                let mut carousel = Carousel::new(total);
                carousel.go_to(index);
                carousel
            })
        })
    }

    proptest! {
        #[test]
        fn next_then_prev_returns_unless_at_end(start in carousel_at()) {
            let mut carousel = start;
            carousel.next();
            carousel.prev();

            if start.index() == start.total() - 1 && start.total() > 1 {
                prop_assert_eq!(carousel.index(), start.index() - 1);
            } else {
                prop_assert_eq!(carousel.index(), start.index());
            }
        }

        #[test]
        fn index_never_leaves_bounds(start in carousel_at(), moves in prop::collection::vec(0u8..3, 0..64)) {
            let mut carousel = start;
            for m in moves {
                match m {
                    0 => carousel.next(),
                    1 => carousel.prev(),
                    _ => carousel.go_to(carousel.index() * 7 + 3),
                }
                prop_assert!(carousel.index() < carousel.total());
            }
        }

        #[test]
        fn go_to_sets_offset(total in 1usize..64, seed in any::<usize>()) {
            let target = seed % total;
            let mut carousel = Carousel::new(total);
            carousel.go_to(target);
            prop_assert_eq!(carousel.offset_percent(), -(target as i64) * 100);
        }

        #[test]
        fn buttons_disable_exactly_at_bounds(carousel in carousel_at()) {
            prop_assert_eq!(carousel.can_prev(), carousel.index() != 0);
            prop_assert_eq!(carousel.can_next(), carousel.index() != carousel.total() - 1);
        }
    }
}

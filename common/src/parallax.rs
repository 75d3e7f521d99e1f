pub const PARALLAX_FACTOR: f64 = 0.5;

// hero parallax
//
// purely derived from the current scroll offset, nothing is retained between
// events
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    factor: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Parallax::new(PARALLAX_FACTOR)
    }
}

impl Parallax {
    pub fn new(factor: f64) -> Self {
        Parallax { factor }
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        self.factor * scroll_y
    }

    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(scroll_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_at_half_scroll_speed() {
        let parallax = Parallax::default();
        assert_eq!(parallax.offset(400.0), 200.0);
        assert_eq!(parallax.transform(0.0), "translateY(0px)");
        assert_eq!(parallax.transform(301.0), "translateY(150.5px)");
    }
}

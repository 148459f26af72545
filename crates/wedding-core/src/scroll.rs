//! Scroll-driven navigation helpers.

pub const NAV_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
/// How far below the top of the viewport the active-section probe sits.
pub const ACTIVE_SECTION_PROBE: f64 = 100.0;
/// Height of the fixed header that anchor targets must clear.
pub const HEADER_OFFSET: f64 = 80.0;
pub const ACTIVE_SECTION_THROTTLE_MS: f64 = 100.0;

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

/// Page geometry of one navigable section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section under the probe line, if any.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Document offset to scroll to so the element sits just below the header.
///
/// `element_top` is relative to the viewport, as returned by `getBoundingClientRect`.
pub fn anchor_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET
}

/// Lets a call through at most once per period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    period_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(period_ms: f64) -> Self {
        Self { period_ms, last: None }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.period_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 800.0 },
            SectionBounds { id: "story".into(), top: 800.0, height: 600.0 },
            SectionBounds { id: "rsvp".into(), top: 1400.0, height: 900.0 },
        ]
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!nav_scrolled(50.0));
        assert!(nav_scrolled(51.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.5));
    }

    #[test]
    fn active_section_uses_probe_line() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0), Some("story"));
        assert_eq!(active_section(&sections, 1350.0), Some("rsvp"));
        assert_eq!(active_section(&sections, 5000.0), None);
    }

    #[test]
    fn anchor_target_clears_header() {
        assert_eq!(anchor_target(300.0, 1000.0), 1220.0);
    }

    #[test]
    fn throttle_skips_calls_inside_period() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(50.0));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(150.0));
    }
}

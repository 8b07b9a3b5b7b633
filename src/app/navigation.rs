//! Current-page resolution, smooth scrolling support, and the collapsible
//! menu state machine.
//!
//! The web original determined the current page twice (once from the URL
//! path, once from the document title) with subtly different results; here
//! the path-based rule is the single canonical one.

/// Width at or below which the nav links collapse behind the menu button.
pub const MOBILE_BREAKPOINT: i32 = 768;

pub const MENU_GLYPH_CLOSED: &str = "\u{2630}"; // ☰
pub const MENU_GLYPH_OPEN: &str = "\u{2715}"; // ✕

/// Final path segment of a location, defaulting to the landing page.
pub fn current_page(location: &str) -> &str {
    location
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("index.html")
}

/// True for in-page anchors ("#about"), false for page links ("index.html").
pub fn is_anchor(href: &str) -> bool {
    href.starts_with('#')
}

/// Intermediate scroll positions for an animated jump, ending exactly at
/// `to`. An empty result means there is nothing to animate.
pub fn scroll_steps(from: i32, to: i32, frames: u32) -> Vec<i32> {
    if from == to || frames == 0 {
        return Vec::new();
    }
    let span = (to - from) as f64;
    (1..=frames)
        .map(|i| {
            // ease-out: fast start, gentle landing
            let t = i as f64 / frames as f64;
            let eased = 1.0 - (1.0 - t) * (1.0 - t);
            from + (span * eased).round() as i32
        })
        .collect()
}

/// The collapsed menu's open/closed state. The widgets mirroring it (panel
/// visibility, button glyph, scroll lock) are synced by the caller after
/// every transition that returns true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn glyph(self) -> &'static str {
        if self.open {
            MENU_GLYPH_OPEN
        } else {
            MENU_GLYPH_CLOSED
        }
    }

    /// Menu button clicked. Always changes state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was activated; the menu always closes.
    /// Returns true when the state changed.
    pub fn on_link_click(&mut self) -> bool {
        self.close()
    }

    /// A press landed outside both the panel and the button.
    pub fn on_outside_click(&mut self) -> bool {
        self.close()
    }

    /// The window was resized; growing past the breakpoint closes the menu.
    pub fn on_resize(&mut self, width: i32) -> bool {
        if width > MOBILE_BREAKPOINT {
            self.close()
        } else {
            false
        }
    }

    fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_empty_location() {
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/"), "index.html");
    }

    #[test]
    fn test_current_page_takes_final_segment() {
        assert_eq!(current_page("/a/b/about.html"), "about.html");
        assert_eq!(current_page("index.html"), "index.html");
        assert_eq!(current_page("/site/"), "index.html");
    }

    #[test]
    fn test_is_anchor() {
        assert!(is_anchor("#contact"));
        assert!(!is_anchor("index.html"));
    }

    #[test]
    fn test_menu_open_then_outside_click_closes() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.glyph(), MENU_GLYPH_OPEN);

        assert!(menu.on_outside_click());
        assert!(!menu.is_open());
        assert_eq!(menu.glyph(), MENU_GLYPH_CLOSED);
    }

    #[test]
    fn test_menu_open_then_resize_past_breakpoint_closes() {
        let mut menu = MenuState::new();
        menu.toggle();

        // Still mobile width: stays open
        assert!(!menu.on_resize(MOBILE_BREAKPOINT));
        assert!(menu.is_open());

        assert!(menu.on_resize(MOBILE_BREAKPOINT + 1));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_link_click_closes() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.on_link_click());
        assert!(!menu.is_open());

        // Closing an already-closed menu is a no-op
        assert!(!menu.on_link_click());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_steps_end_exactly_at_target() {
        let steps = scroll_steps(0, 500, 20);
        assert_eq!(steps.len(), 20);
        assert_eq!(*steps.last().unwrap(), 500);

        let steps = scroll_steps(800, 120, 20);
        assert_eq!(*steps.last().unwrap(), 120);
    }

    #[test]
    fn test_scroll_steps_monotonic() {
        let steps = scroll_steps(0, 500, 20);
        for pair in steps.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_scroll_steps_no_movement() {
        assert!(scroll_steps(300, 300, 20).is_empty());
        assert!(scroll_steps(0, 100, 0).is_empty());
    }
}

//! Navbar and mobile menu

/// Sticky navbar and mobile menu state
#[derive(Clone, Debug, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl NavState {
    /// Navbar switches to its scrolled look past `threshold` pixels
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    /// Returns the new `scrolled` flag when it flips, `None` otherwise
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    /// Menu button clicked; returns the new open state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A nav link was followed
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut nav = NavState::new(100.0);
        assert_eq!(nav.on_scroll(100.0), None);
        assert_eq!(nav.on_scroll(101.0), Some(true));
        assert_eq!(nav.on_scroll(500.0), None);
        assert_eq!(nav.on_scroll(0.0), Some(false));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = NavState::new(100.0);
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open());
    }
}

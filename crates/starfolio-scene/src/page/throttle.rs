//! One scroll handler per animation frame

/// Coalesces scroll events until the next animation frame
#[derive(Clone, Debug, Default)]
pub struct ScrollThrottle {
    last_scroll_y: f64,
    ticking: bool,
}

impl ScrollThrottle {
    /// Record a scroll event; true when the caller must schedule a frame
    pub fn request(&mut self, scroll_y: f64) -> bool {
        self.last_scroll_y = scroll_y;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// The scheduled frame ran; returns the offset to handle
    pub fn frame_done(&mut self) -> f64 {
        self.ticking = false;
        self.last_scroll_y
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_schedules_once() {
        let mut t = ScrollThrottle::default();
        assert!(t.request(10.0));
        assert!(!t.request(20.0));
        assert!(!t.request(30.0));
        assert_eq!(t.frame_done(), 30.0);
        assert!(t.request(40.0));
    }
}

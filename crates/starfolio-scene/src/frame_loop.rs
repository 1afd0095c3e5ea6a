//! Start/stop control for a host-driven render loop
//!
//! The browser calls back once per animation frame; `FrameLoop` decides
//! whether that frame does any work and hands out the timing for it.
//! Stopping is how the background pauses while the tab is hidden.

/// Timing for one frame of work
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since the first frame
    pub elapsed_ms: f64,
    /// Milliseconds since the previous frame that did work (0 for the first)
    pub delta_ms: f64,
    /// Number of frames run before this one
    pub frame: u64,
}

/// Frame loop state
#[derive(Clone, Debug)]
pub struct FrameLoop {
    running: bool,
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// Create a running loop
    pub fn new() -> Self {
        Self {
            running: true,
            origin_ms: None,
            last_ms: None,
            frames: 0,
        }
    }

    /// Resume frames
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause frames; the next `begin_frame` returns `None`
    pub fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Stop while the page is hidden, run while it is visible
    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Start a frame at `now_ms`, or `None` while stopped
    ///
    /// The delta after a pause restarts at 0 so nothing jumps on resume.
    pub fn begin_frame(&mut self, now_ms: f64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let delta_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);

        let tick = FrameTick {
            elapsed_ms: (now_ms - origin).max(0.0),
            delta_ms,
            frame: self.frames,
        };
        self.frames += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame() {
        let mut lp = FrameLoop::new();
        let tick = lp.begin_frame(5000.0).unwrap();
        assert_eq!(tick.elapsed_ms, 0.0);
        assert_eq!(tick.delta_ms, 0.0);
        assert_eq!(tick.frame, 0);
    }

    #[test]
    fn test_timing_advances() {
        let mut lp = FrameLoop::new();
        lp.begin_frame(1000.0);
        let tick = lp.begin_frame(1016.0).unwrap();
        assert_eq!(tick.elapsed_ms, 16.0);
        assert_eq!(tick.delta_ms, 16.0);
        assert_eq!(tick.frame, 1);
    }

    #[test]
    fn test_stopped_loop_does_no_work() {
        let mut lp = FrameLoop::new();
        lp.stop();
        assert!(lp.begin_frame(0.0).is_none());
        assert_eq!(lp.frame_count(), 0);
    }

    #[test]
    fn test_visibility_pause_and_resume() {
        let mut lp = FrameLoop::new();
        lp.begin_frame(0.0);
        lp.on_visibility_change(true);
        assert!(!lp.is_running());
        assert!(lp.begin_frame(16.0).is_none());

        lp.on_visibility_change(false);
        let tick = lp.begin_frame(10_000.0).unwrap();
        assert_eq!(tick.delta_ms, 0.0);
        assert_eq!(tick.elapsed_ms, 10_000.0);
        assert_eq!(tick.frame, 1);
    }
}

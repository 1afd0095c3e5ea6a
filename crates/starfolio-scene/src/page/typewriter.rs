//! Typing effect for the hero subtitle

/// Reveals a string one character at a time
///
/// The first character appears at `start_ms`, then one more every
/// `speed_ms` until the full text is shown.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Byte offset after each character
    boundaries: Vec<usize>,
    speed_ms: f64,
    start_ms: f64,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed_ms: f64, start_ms: f64) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            boundaries,
            speed_ms,
            start_ms,
        }
    }

    /// Number of characters visible at `now_ms`
    pub fn chars_at(&self, now_ms: f64) -> usize {
        if now_ms < self.start_ms {
            return 0;
        }
        if self.speed_ms <= 0.0 {
            return self.boundaries.len();
        }
        let typed = ((now_ms - self.start_ms) / self.speed_ms).floor() as usize;
        let typed = typed.saturating_add(1);
        typed.min(self.boundaries.len())
    }

    /// Text visible at `now_ms`
    pub fn visible_at(&self, now_ms: f64) -> &str {
        match self.chars_at(now_ms) {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.chars_at(now_ms) == self.boundaries.len()
    }

    /// Time at which the last character appears
    pub fn finish_ms(&self) -> f64 {
        let steps = self.boundaries.len().saturating_sub(1) as f64;
        self.start_ms + steps * self.speed_ms
    }
}

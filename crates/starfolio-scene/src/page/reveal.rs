//! Reveal-on-scroll styles and skill bars

use crate::config::PageConfig;

/// Content blocks that fade in when scrolled into view
pub const REVEAL_SELECTORS: &str =
    ".skill-category, .project-card, .cert-card, .achievement-card, .timeline-item, .experience-item";

/// Inline styles for the hidden and revealed states
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub hidden_opacity: &'static str,
    pub hidden_transform: String,
    pub transition: String,
    pub shown_opacity: &'static str,
    pub shown_transform: &'static str,
    /// IntersectionObserver threshold
    pub threshold: f64,
    /// IntersectionObserver root margin
    pub root_margin: String,
}

impl RevealStyle {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            hidden_opacity: "0",
            hidden_transform: format!("translateY({}px)", config.reveal_offset_px),
            transition: format!(
                "opacity {s}s ease-out, transform {s}s ease-out",
                s = config.reveal_transition_s
            ),
            shown_opacity: "1",
            shown_transform: "translateY(0)",
            threshold: config.reveal_threshold,
            root_margin: format!("0px 0px {}px 0px", config.reveal_root_margin_bottom),
        }
    }

    /// Reveals are one-way: only an intersecting entry changes anything
    pub fn should_reveal(intersecting: bool) -> bool {
        intersecting
    }
}

/// A skill progress bar that fills once it is mostly on screen
#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    target: String,
    filled: bool,
}

impl SkillBar {
    /// `progress` is the bar's `--progress` custom property, e.g. `"85%"`
    pub fn new(progress: impl Into<String>) -> Self {
        Self {
            target: progress.into().trim().to_string(),
            filled: false,
        }
    }

    /// Width before the bar has been seen
    pub fn initial_width(&self) -> &'static str {
        "0"
    }

    /// Returns the width to apply when the bar enters view
    pub fn on_intersect(&mut self, intersecting: bool) -> Option<&str> {
        if !intersecting {
            return None;
        }
        self.filled = true;
        Some(&self.target)
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let style = RevealStyle::new(&PageConfig::default());
        assert_eq!(style.hidden_transform, "translateY(50px)");
        assert_eq!(style.transition, "opacity 0.6s ease-out, transform 0.6s ease-out");
        assert_eq!(style.root_margin, "0px 0px -100px 0px");
        assert_eq!(style.threshold, 0.1);
    }

    #[test]
    fn test_only_intersecting_reveals() {
        assert!(RevealStyle::should_reveal(true));
        assert!(!RevealStyle::should_reveal(false));
    }

    #[test]
    fn test_skill_bar_fills_on_view() {
        let mut bar = SkillBar::new(" 85% ");
        assert_eq!(bar.initial_width(), "0");
        assert_eq!(bar.on_intersect(false), None);
        assert!(!bar.is_filled());
        assert_eq!(bar.on_intersect(true), Some("85%"));
        assert!(bar.is_filled());
    }

    #[test]
    fn test_selectors_cover_all_blocks() {
        assert_eq!(REVEAL_SELECTORS.split(", ").count(), 6);
    }
}

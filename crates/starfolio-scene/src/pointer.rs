//! Latest pointer position

use crate::math::{Size, Vec2};

/// Pointer position in client pixels and normalised device space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Client coordinates of the last move
    pub client: Vec2,
    /// Normalised to `[-1, 1]` on both axes, y down
    pub normalized: Vec2,
}

impl PointerState {
    /// Record a move at client `(x, y)` within `viewport`
    pub fn moved(&mut self, x: f32, y: f32, viewport: Size) {
        self.client = Vec2::new(x, y);
        self.normalized = normalize(self.client, viewport);
    }

    /// Recompute the normalised position after the viewport changed size
    pub fn renormalize(&mut self, viewport: Size) {
        self.normalized = normalize(self.client, viewport);
    }
}

/// Map client coordinates to `[-1, 1]`; an empty viewport maps to the centre
pub fn normalize(client: Vec2, viewport: Size) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    Vec2::new(
        client.x / viewport.width * 2.0 - 1.0,
        client.y / viewport.height * 2.0 - 1.0,
    )
}

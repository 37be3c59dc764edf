use crate::math::clamp_magnitude;
use glam::Vec2;

/// A host bounding box in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pointer position relative to the centre of `rect`, scaled so the rect's
/// edges sit at 1 and clamped to the unit disc.
///
/// Returns `None` for a degenerate rect so callers can skip the update.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, rect: &Rect) -> Option<Vec2> {
    if !rect.has_area() || !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    let half = Vec2::new(rect.width * 0.5, rect.height * 0.5);
    let n = (Vec2::new(client_x, client_y) - rect.center()) / half;
    let n = clamp_magnitude(n, 1.0);
    n.is_finite().then_some(n)
}

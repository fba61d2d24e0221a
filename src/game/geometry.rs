//! Axis-aligned rectangle overlap used by every collision check.

/// A rectangle given by its top-left corner and size, in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// True when the intersection of `a` and `b` has positive area.
///
/// Rectangles that only share an edge or a corner do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let left = a.x.max(b.x);
    let right = a.right().min(b.right());
    let top = a.y.max(b.y);
    let bottom = a.bottom().min(b.bottom());
    left < right && top < bottom
}

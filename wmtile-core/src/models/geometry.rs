//! Window and tiling-area sizing structs.
use serde::{Deserialize, Serialize};

/// An integer pixel rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Geometry {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Containment is half-open on both axes, `[x, x+w) x [y, y+h)`, so a
    /// point on the shared edge of two adjacent rectangles belongs to exactly
    /// one of them.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.w && self.y <= y && y < self.y + self.h
    }
}

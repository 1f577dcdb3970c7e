//! World-to-screen coordinate mapping
//!
//! Units live in world (grid) units: one tile is `1.0`. The playfield is
//! drawn by scaling world units with a per-frame [`DrawTransform`] that the
//! game loop supplies. Entities never own or mutate the transform, they only
//! read it while drawing.
//!
//! # Example
//!
//! ```rust
//! use towerdefense::transform::DrawTransform;
//!
//! // 32 pixels per tile, playfield shifted 10px right and 20px down
//! let transform = DrawTransform::new(32.0, 10.0, 20.0);
//! assert_eq!(transform.to_screen_x(2.0), 74.0);
//! assert_eq!(transform.to_screen_y(1.0), 52.0);
//! ```

use serde::{Deserialize, Serialize};

/// Per-frame snapshot mapping world units to screen pixels.
///
/// `screen = world * coefficient + offset`, independently on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawTransform {
    pub coefficient: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl DrawTransform {
    pub fn new(coefficient: f32, offset_x: f32, offset_y: f32) -> Self {
        DrawTransform {
            coefficient,
            offset_x,
            offset_y,
        }
    }

    pub fn to_screen_x(&self, world_x: f32) -> f32 {
        world_x * self.coefficient + self.offset_x
    }

    pub fn to_screen_y(&self, world_y: f32) -> f32 {
        world_y * self.coefficient + self.offset_y
    }

    /// Scales a world length (width/height) to pixels. Offsets don't apply.
    pub fn to_screen_length(&self, world_length: f32) -> f32 {
        world_length * self.coefficient
    }

    /// Maps a world-space box to its screen-space bounds.
    pub fn to_screen_rect(&self, x: f32, y: f32, width: f32, height: f32) -> ScreenRect {
        let left = self.to_screen_x(x);
        let top = self.to_screen_y(y);
        ScreenRect::new(
            left,
            top,
            left + self.to_screen_length(width),
            top + self.to_screen_length(height),
        )
    }
}

impl Default for DrawTransform {
    /// Identity mapping: one world unit is one pixel.
    fn default() -> Self {
        DrawTransform::new(1.0, 0.0, 0.0)
    }
}

/// A mutable 2D point in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Axis-aligned rectangle in screen pixels, stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        ScreenRect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        ScreenRect::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Hit test. Left/top edges are inside, right/bottom edges are outside,
    /// so two rectangles sharing an edge never both claim a point.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_applies_coefficient_then_offset() {
        let transform = DrawTransform::new(32.0, 10.0, 20.0);
        assert_eq!(transform.to_screen_x(0.0), 10.0);
        assert_eq!(transform.to_screen_x(2.0), 74.0);
        assert_eq!(transform.to_screen_y(1.5), 68.0);
        assert_eq!(transform.to_screen_length(1.5), 48.0);
    }

    #[test]
    fn test_screen_rect_from_world_box() {
        let transform = DrawTransform::new(10.0, 5.0, 0.0);
        let rect = transform.to_screen_rect(1.0, 2.0, 3.0, 0.5);
        assert_eq!(rect, ScreenRect::new(15.0, 20.0, 45.0, 25.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 5.0);
    }

    #[test]
    fn test_point_set_and_offset() {
        let mut point = Point::default();
        point.offset(1.5, -2.0);
        point.offset(0.5, 1.0);
        assert_eq!(point, Point::new(2.0, -1.0));

        point.set(-3.0, 4.0);
        assert_eq!(point, Point::new(-3.0, 4.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = ScreenRect::from_size(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 29.9));
        assert!(!rect.contains(30.0, 15.0));
        assert!(!rect.contains(15.0, 30.0));
        assert!(!rect.contains(9.9, 15.0));
    }
}

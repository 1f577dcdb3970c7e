//! Drawing surface contract and the shared paint style
//!
//! Everything in this crate draws through the [`Surface`] trait, which keeps
//! the entity and HUD code independent from the renderer. The SDL2 backend
//! (feature `sdl`) implements it on top of a window canvas;
//! [`RecordingSurface`] implements it headlessly by recording every call,
//! which is what the tests draw into.
//!
//! # Shared paint
//!
//! A single [`Paint`] is usually reused for many entities in one frame. Code
//! that needs a different color for a moment takes a [`PaintScope`], which
//! gives mutable access and puts the original color back when dropped:
//!
//! ```rust
//! use towerdefense::surface::{Color, Paint};
//!
//! let mut paint = Paint::default();
//! {
//!     let mut scope = paint.scoped();
//!     scope.color = Color::RED;
//! }
//! assert_eq!(paint.color, Color::WHITE);
//! ```

use crate::transform::ScreenRect;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// Which side of the anchor X the text extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Text ends at the anchor.
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text starts at the anchor.
    Right,
}

/// Which side of the anchor Y the text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlign {
    /// Text bottom rests on the anchor.
    Top,
    /// Text is centered on the anchor.
    Center,
    /// Text top hangs from the anchor.
    Bottom,
}

impl HorizontalAlign {
    /// Left edge of a text of `width` anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            HorizontalAlign::Left => x - width,
            HorizontalAlign::Center => x - width / 2.0,
            HorizontalAlign::Right => x,
        }
    }
}

impl VerticalAlign {
    /// Top edge of a text of `height` anchored at `y`.
    pub fn top_edge(self, y: f32, height: f32) -> f32 {
        match self {
            VerticalAlign::Top => y - height,
            VerticalAlign::Center => y - height / 2.0,
            VerticalAlign::Bottom => y,
        }
    }
}

/// Opaque handle to a texture owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Region of a texture, in texture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Drawing style shared between draw calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Text height in pixels
    pub text_size: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Paint {
            color: Color::WHITE,
            text_size: 30.0,
        }
    }
}

impl Paint {
    pub fn new(color: Color, text_size: f32) -> Self {
        Paint { color, text_size }
    }

    /// Borrows the paint for temporary changes. The color in effect now is
    /// restored when the scope is dropped.
    pub fn scoped(&mut self) -> PaintScope<'_> {
        PaintScope::new(self)
    }
}

/// Mutable borrow of a [`Paint`] that restores its color on drop.
pub struct PaintScope<'a> {
    paint: &'a mut Paint,
    saved_color: Color,
}

impl<'a> PaintScope<'a> {
    pub fn new(paint: &'a mut Paint) -> Self {
        let saved_color = paint.color;
        PaintScope { paint, saved_color }
    }
}

impl Deref for PaintScope<'_> {
    type Target = Paint;

    fn deref(&self) -> &Paint {
        &*self.paint
    }
}

impl DerefMut for PaintScope<'_> {
    fn deref_mut(&mut self) -> &mut Paint {
        &mut *self.paint
    }
}

impl Drop for PaintScope<'_> {
    fn drop(&mut self) {
        self.paint.color = self.saved_color;
    }
}

/// A drawing target.
///
/// Implementations are infallible from the caller's side: a backend that can
/// fail (SDL) logs the failure and carries on with the frame.
pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: ScreenRect, color: Color);

    fn draw_texture(&mut self, texture: TextureId, source: Option<SourceRect>, dest: ScreenRect);

    /// Draws `text` relative to the anchor `(x, y)` using the paint's color
    /// and text size.
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
        paint: &Paint,
    );

    /// Width in pixels `text` would take when drawn with `paint`.
    fn measure_text(&self, text: &str, paint: &Paint) -> f32;
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        rect: ScreenRect,
        color: Color,
    },
    Texture {
        texture: TextureId,
        source: Option<SourceRect>,
        dest: ScreenRect,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
        color: Color,
    },
}

/// Headless surface that keeps a log of everything drawn on it.
///
/// Text width is approximated as `0.6 * text_size` per character.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// All text drawn so far, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls, typically between frames.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn draw_texture(&mut self, texture: TextureId, source: Option<SourceRect>, dest: ScreenRect) {
        self.calls.push(DrawCall::Texture {
            texture,
            source,
            dest,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
        paint: &Paint,
    ) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            horizontal,
            vertical,
            color: paint.color,
        });
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        text.chars().count() as f32 * paint.text_size * 3.0 / 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_scope_restores_color() {
        let mut paint = Paint::new(Color::rgb(1, 2, 3), 12.0);
        {
            let mut scope = paint.scoped();
            scope.color = Color::RED;
            scope.text_size = 20.0;
            assert_eq!(scope.color, Color::RED);
        }
        assert_eq!(paint.color, Color::rgb(1, 2, 3));
        // Only the color is part of the save/restore contract
        assert_eq!(paint.text_size, 20.0);
    }

    #[test]
    fn test_alignment_edges() {
        assert_eq!(HorizontalAlign::Left.left_edge(100.0, 40.0), 60.0);
        assert_eq!(HorizontalAlign::Center.left_edge(100.0, 40.0), 80.0);
        assert_eq!(HorizontalAlign::Right.left_edge(100.0, 40.0), 100.0);

        assert_eq!(VerticalAlign::Top.top_edge(50.0, 10.0), 40.0);
        assert_eq!(VerticalAlign::Center.top_edge(50.0, 10.0), 45.0);
        assert_eq!(VerticalAlign::Bottom.top_edge(50.0, 10.0), 50.0);
    }

    #[test]
    fn test_recording_surface_records_in_order() {
        let mut surface = RecordingSurface::new(640, 400);
        let paint = Paint::default();
        surface.fill_rect(ScreenRect::from_size(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        surface.draw_text("HP", 1.0, 2.0, HorizontalAlign::Center, VerticalAlign::Top, &paint);

        assert_eq!(surface.calls().len(), 2);
        assert_eq!(surface.texts(), vec!["HP"]);
        assert_eq!(surface.size(), (640, 400));

        surface.clear();
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_measure_text_scales_with_size() {
        let surface = RecordingSurface::new(10, 10);
        let paint = Paint::new(Color::WHITE, 10.0);
        assert_eq!(surface.measure_text("abcd", &paint), 24.0);
    }
}

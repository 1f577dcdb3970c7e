use crate::transform::ScreenRect;
use serde::{Deserialize, Serialize};

/// A placement expressed as fractions of the screen's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalRect {
    pub x: f32,
    pub y: f32,
    /// `0.0` means "as wide as it is tall, in pixels"
    pub width: f32,
    pub height: f32,
}

impl FractionalRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        FractionalRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Resolves fractional HUD placements to pixels.
///
/// Margins are specified on the Y axis and converted to X with a single
/// assumed aspect ratio (`margin_x = margin_y / assumed_aspect_ratio`).
/// Screens with a different ratio get slightly different visual margins;
/// only one ratio is supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudLayout {
    pub screen_width: f32,
    pub screen_height: f32,
    pub assumed_aspect_ratio: f32,
    pub margin_y: f32,
    pub button_side_y: f32,
    /// HUD text height in pixels
    pub text_size: f32,
}

impl Default for HudLayout {
    fn default() -> Self {
        HudLayout {
            screen_width: 1280.0,
            screen_height: 800.0,
            assumed_aspect_ratio: 16.0 / 10.0,
            margin_y: 0.02,
            button_side_y: 0.1,
            text_size: 30.0,
        }
    }
}

impl HudLayout {
    /// Default proportions for a screen of the given pixel size.
    pub fn for_screen(width: u32, height: u32) -> Self {
        HudLayout {
            screen_width: width as f32,
            screen_height: height as f32,
            ..Default::default()
        }
    }

    pub fn margin_x(&self) -> f32 {
        self.margin_y / self.assumed_aspect_ratio
    }

    pub fn button_side_x(&self) -> f32 {
        self.button_side_y / self.assumed_aspect_ratio
    }

    pub fn to_pixels_x(&self, fraction: f32) -> f32 {
        fraction * self.screen_width
    }

    pub fn to_pixels_y(&self, fraction: f32) -> f32 {
        fraction * self.screen_height
    }

    pub fn resolve(&self, rect: FractionalRect) -> ScreenRect {
        let left = self.to_pixels_x(rect.x);
        let top = self.to_pixels_y(rect.y);
        let height = self.to_pixels_y(rect.height);
        let width = if rect.width == 0.0 {
            height
        } else {
            self.to_pixels_x(rect.width)
        };
        ScreenRect::from_size(left, top, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_follow_assumed_ratio() {
        let layout = HudLayout {
            assumed_aspect_ratio: 2.0,
            margin_y: 0.04,
            button_side_y: 0.2,
            ..Default::default()
        };
        assert_eq!(layout.margin_x(), 0.02);
        assert_eq!(layout.button_side_x(), 0.1);
    }

    #[test]
    fn test_resolve_fractional_rect() {
        let layout = HudLayout::for_screen(1000, 500);
        let rect = layout.resolve(FractionalRect::new(0.5, 0.25, 0.25, 0.5));
        assert_eq!(rect, ScreenRect::new(500.0, 125.0, 750.0, 375.0));
    }

    #[test]
    fn test_zero_width_resolves_square() {
        let layout = HudLayout::for_screen(1000, 500);
        let rect = layout.resolve(FractionalRect::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(rect.width(), 250.0);
        assert_eq!(rect.height(), 250.0);
    }

    #[test]
    fn test_layout_config_defaults_missing_fields() {
        let layout: HudLayout =
            serde_json::from_str(r#"{ "screen_width": 640, "screen_height": 400 }"#).unwrap();
        assert_eq!(layout.screen_width, 640.0);
        assert_eq!(layout.margin_y, 0.02);
        assert_eq!(layout.assumed_aspect_ratio, 1.6);
    }
}

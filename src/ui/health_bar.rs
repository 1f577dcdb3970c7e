//! Health bar drawn above a unit
//!
//! Unit kinds that want a visible health gauge call [`HealthBar::render`]
//! from their `draw_hud` hook, passing the unit's screen-space box. One bar
//! can serve every unit of a kind: it holds only its style.
//!
//! # Example
//!
//! ```rust
//! use towerdefense::surface::RecordingSurface;
//! use towerdefense::transform::ScreenRect;
//! use towerdefense::ui::HealthBar;
//!
//! let bar = HealthBar::new();
//! let mut surface = RecordingSurface::new(640, 400);
//! bar.render(&mut surface, ScreenRect::new(100.0, 100.0, 132.0, 132.0), 0.5);
//! assert!(!surface.calls().is_empty());
//! ```

use crate::surface::{Color, Surface};
use crate::transform::ScreenRect;
use serde::{Deserialize, Serialize};

/// Configuration for health bar appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBarStyle {
    /// Bar width in pixels
    pub width: f32,

    /// Bar height in pixels
    pub height: f32,

    /// Gap between the bar's bottom and the unit's top edge
    pub gap: f32,

    /// Shown behind the remaining health
    pub background_color: Color,

    /// Fill color above the low-health threshold
    pub health_color: Color,

    /// Fill color at or below `low_health_threshold`
    pub low_health_color: Color,

    pub low_health_threshold: f32,

    /// Outline color, `None` for no outline
    pub border_color: Option<Color>,

    /// Show bar even when at full health?
    pub show_when_full: bool,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 32.0,
            height: 6.0,
            gap: 4.0,
            background_color: Color::rgb(50, 50, 50),
            health_color: Color::rgb(0, 200, 0),
            low_health_color: Color::rgb(200, 0, 0),
            low_health_threshold: 0.3,
            border_color: Some(Color::BLACK),
            show_when_full: false,
        }
    }
}

/// Stateless health gauge.
#[derive(Debug, Clone, Default)]
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Screen rectangle of the bar for a unit occupying `unit_box`:
    /// horizontally centered, `gap` pixels above the unit.
    pub fn bar_rect(&self, unit_box: ScreenRect) -> ScreenRect {
        let left = unit_box.center_x() - self.style.width / 2.0;
        let bottom = unit_box.top - self.style.gap;
        ScreenRect::new(left, bottom - self.style.height, left + self.style.width, bottom)
    }

    /// Draws the bar for `health_percentage` (clamped to 0.0-1.0).
    pub fn render(&self, surface: &mut dyn Surface, unit_box: ScreenRect, health_percentage: f32) {
        if !self.style.show_when_full && health_percentage >= 1.0 {
            return;
        }

        let bar = self.bar_rect(unit_box);
        surface.fill_rect(bar, self.style.background_color);

        let filled = self.style.width * health_percentage.clamp(0.0, 1.0);
        if filled > 0.0 {
            let fill_color = if health_percentage <= self.style.low_health_threshold {
                self.style.low_health_color
            } else {
                self.style.health_color
            };
            surface.fill_rect(
                ScreenRect::new(bar.left, bar.top, bar.left + filled, bar.bottom),
                fill_color,
            );
        }

        if let Some(border_color) = self.style.border_color {
            let t = 1.0;
            surface.fill_rect(ScreenRect::new(bar.left, bar.top, bar.right, bar.top + t), border_color);
            surface.fill_rect(ScreenRect::new(bar.left, bar.bottom - t, bar.right, bar.bottom), border_color);
            surface.fill_rect(ScreenRect::new(bar.left, bar.top, bar.left + t, bar.bottom), border_color);
            surface.fill_rect(ScreenRect::new(bar.right - t, bar.top, bar.right, bar.bottom), border_color);
        }
    }
}

//! Destructible units
//!
//! Every unit on the playfield (creeps, towers, obstacles) is built around a
//! [`Destructible`]: a positioned, sized, animated sprite with health and a
//! weight. Unit kinds compose it and opt into the capability traits below
//! instead of inheriting from it.
//!
//! # Capabilities
//!
//! - [`Drawable`] - draws the unit's sprite through the frame's transform
//! - [`HudRenderable`] - optional overlays above the unit (health bars, debug text)
//! - [`Lifecycle`] - death and out-of-play predicates the owner polls for removal
//! - [`Offensive`] - anything that deals damage
//!
//! # Frame order
//!
//! The owner drives each unit once per frame, in this order: game logic
//! mutates position/health/animation id, then `update_animation()`, then
//! `draw()`, then the HUD hooks. Nothing here blocks or keeps time on its own.

pub mod destructible;

pub use destructible::{CombatStats, Destructible};

use crate::settings::Preferences;
use crate::surface::{Paint, Surface};
use crate::transform::DrawTransform;

/// Anything that deals damage.
pub trait Offensive {
    fn damage(&self) -> i32;
}

/// Draws a unit's body.
pub trait Drawable {
    /// Safe to call every frame, dead or alive.
    fn draw(&mut self, surface: &mut dyn Surface, transform: &DrawTransform);
}

/// Overlays drawn above a unit after every body has been drawn.
pub trait HudRenderable {
    /// Unit-local HUD, such as a health bar. Draws nothing by default.
    fn draw_hud(&self, _surface: &mut dyn Surface, _transform: &DrawTransform) {}

    /// Diagnostic overlay gated by a preference flag. `paint` is shared with
    /// the other units drawn this frame and must come back unchanged.
    fn draw_debug_hud(
        &self,
        _surface: &mut dyn Surface,
        _transform: &DrawTransform,
        _paint: &mut Paint,
        _preferences: &dyn Preferences,
    ) {
    }
}

/// Terminal conditions the owning collection polls.
pub trait Lifecycle {
    fn is_dead(&self) -> bool;

    /// Whether the unit may be removed from play. Same as `is_dead()` unless a
    /// unit kind has another way of leaving the field.
    fn is_out_of_play(&self) -> bool {
        self.is_dead()
    }
}

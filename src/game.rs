//! Match state and the owning collection of units
//!
//! [`GameManager`] holds the pause flag the HUD's play/pause button drives.
//! [`Battlefield`] owns the active units of one kind and runs them through
//! the per-frame order:
//!
//! 1. game logic (`Unit::update`), skipped while paused
//! 2. `update_animation()` on every unit, skipped while paused
//! 3. `draw()` on every unit
//! 4. `draw_hud()`, then `draw_debug_hud()` when a debug paint is supplied
//!
//! Units whose `is_out_of_play()` is true are removed by the battlefield, on
//! request, after drawing. Dead units stay visible until then.

use crate::settings::Preferences;
use crate::surface::{Paint, Surface};
use crate::transform::DrawTransform;
use crate::unit::{Drawable, HudRenderable, Lifecycle};
use tracing::info;

/// Game-state mutators the HUD calls back into.
pub trait GameControl {
    fn pause(&mut self);
    fn resume(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameManager {
    paused: bool,
    frame: u64,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Frames simulated so far. Paused frames don't count.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advances the simulation clock, unless paused. Returns whether the
    /// frame should be simulated.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.frame += 1;
        true
    }
}

impl GameControl for GameManager {
    fn pause(&mut self) {
        if !self.paused {
            info!(frame = self.frame, "game paused");
        }
        self.paused = true;
    }

    fn resume(&mut self) {
        if self.paused {
            info!(frame = self.frame, "game resumed");
        }
        self.paused = false;
    }
}

/// A unit the battlefield can drive.
pub trait Unit: Drawable + HudRenderable + Lifecycle {
    /// Game logic for one frame: movement, attacks, choosing the animation.
    fn update(&mut self) {}

    fn update_animation(&mut self);
}

/// Shared paint and preferences for the optional debug overlay.
pub struct DebugOverlay<'a> {
    pub paint: &'a mut Paint,
    pub preferences: &'a dyn Preferences,
}

pub struct Battlefield<U: Unit> {
    units: Vec<U>,
}

impl<U: Unit> Default for Battlefield<U> {
    fn default() -> Self {
        Battlefield { units: Vec::new() }
    }
}

impl<U: Unit> Battlefield<U> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, unit: U) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[U] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [U] {
        &mut self.units
    }

    /// Steps 1 and 2 of the frame.
    pub fn update(&mut self, game: &GameManager) {
        if game.is_paused() {
            return;
        }
        for unit in &mut self.units {
            unit.update();
        }
        for unit in &mut self.units {
            unit.update_animation();
        }
    }

    /// Steps 3 and 4 of the frame.
    pub fn draw(
        &mut self,
        surface: &mut dyn Surface,
        transform: &DrawTransform,
        debug: Option<DebugOverlay<'_>>,
    ) {
        for unit in &mut self.units {
            unit.draw(surface, transform);
        }
        for unit in &self.units {
            unit.draw_hud(surface, transform);
        }
        if let Some(overlay) = debug {
            for unit in &self.units {
                unit.draw_debug_hud(surface, transform, overlay.paint, overlay.preferences);
            }
        }
    }

    /// Drops every unit that is out of play and returns them.
    pub fn remove_out_of_play(&mut self) -> Vec<U> {
        let (gone, staying): (Vec<U>, Vec<U>) =
            self.units.drain(..).partition(|unit| unit.is_out_of_play());
        self.units = staying;
        if !gone.is_empty() {
            info!(removed = gone.len(), remaining = self.units.len(), "units left play");
        }
        gone
    }
}

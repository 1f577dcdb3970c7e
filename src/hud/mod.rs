//! Screen-space HUD
//!
//! The HUD is an ordered list of [`Control`]s laid over the playfield. It is
//! built once when a match starts and lives until the match ends; controls
//! are never removed in between.
//!
//! # Architecture
//!
//! - Placement is given in fractions of the screen (see [`HudLayout`]) and
//!   resolved to pixels when a control is constructed, not while drawing.
//! - [`ReadOnlyDisplay`] controls query their value every time they draw, so
//!   what they show is never more than a frame old.
//! - [`ToggleButton`] controls flip between two states on tap and call a
//!   different callback in each. Only input can flip them.
//!
//! Draw order and hit-test order are both insertion order. A tap goes to the
//! first control whose bounds contain it.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use towerdefense::hud::{Hud, IconPair, ToggleButton, ToggleState};
//! use towerdefense::surface::TextureId;
//! use towerdefense::transform::ScreenRect;
//!
//! let paused = Rc::new(Cell::new(false));
//! let (on_pause, on_resume) = (Rc::clone(&paused), Rc::clone(&paused));
//!
//! let mut hud = Hud::new();
//! hud.add_control(ToggleButton::new(
//!     ScreenRect::from_size(0.0, 0.0, 40.0, 40.0),
//!     IconPair::single(TextureId(1)),
//!     IconPair::single(TextureId(2)),
//!     move || on_pause.set(true),
//!     move || on_resume.set(false),
//! ));
//!
//! assert!(hud.tap(10.0, 10.0));
//! assert!(paused.get());
//! assert!(!hud.tap(100.0, 100.0));
//! assert!(paused.get());
//! ```

pub mod display;
pub mod layout;
pub mod main_hud;
pub mod toggle_button;

pub use display::ReadOnlyDisplay;
pub use layout::{FractionalRect, HudLayout};
pub use main_hud::{build_main_hud, MainHudIcons};
pub use toggle_button::{IconPair, ToggleButton, ToggleState};

use crate::surface::Surface;
use crate::transform::ScreenRect;
use tracing::debug;

/// One element of the HUD.
pub trait Control {
    fn draw(&self, surface: &mut dyn Surface);

    /// Pixel bounds used for hit testing. Display-only controls have none
    /// and never receive input.
    fn bounds(&self) -> Option<ScreenRect> {
        None
    }

    /// Press feedback while a touch that started on the control is held.
    fn set_pressed(&mut self, _pressed: bool) {}

    /// A touch went down and came back up inside the control.
    fn on_tap(&mut self) {}
}

/// Pointer input routed to the HUD, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    /// The touch was taken away (focus lost, window left)
    Cancel,
}

#[derive(Default)]
pub struct Hud {
    controls: Vec<Box<dyn Control>>,
    /// Control the current touch started on
    pressed: Option<usize>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_control<C: Control + 'static>(&mut self, control: C) {
        self.controls.push(Box::new(control));
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Draws every control, in insertion order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for control in &self.controls {
            control.draw(surface);
        }
    }

    /// Index of the first control whose bounds contain the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.controls.iter().position(|control| {
            control
                .bounds()
                .is_some_and(|bounds| bounds.contains(x, y))
        })
    }

    /// Routes a touch event. Returns `true` if the HUD consumed it, in which
    /// case the playfield shouldn't see it.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        match event {
            TouchEvent::Down { x, y } => {
                self.release();
                match self.hit_test(x, y) {
                    Some(index) => {
                        self.controls[index].set_pressed(true);
                        self.pressed = Some(index);
                        true
                    }
                    None => false,
                }
            }
            TouchEvent::Up { x, y } => {
                let Some(index) = self.release() else {
                    return false;
                };
                let control = &mut self.controls[index];
                if control.bounds().is_some_and(|bounds| bounds.contains(x, y)) {
                    control.on_tap();
                    debug!(control = index, "HUD tap dispatched");
                }
                true
            }
            TouchEvent::Cancel => self.release().is_some(),
        }
    }

    /// A press and release at the same point.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.handle_touch(TouchEvent::Down { x, y }) && self.handle_touch(TouchEvent::Up { x, y })
    }

    fn release(&mut self) -> Option<usize> {
        let index = self.pressed.take()?;
        self.controls[index].set_pressed(false);
        Some(index)
    }
}

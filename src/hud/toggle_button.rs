use super::Control;
use crate::surface::{Surface, TextureId};
use crate::transform::ScreenRect;
use tracing::debug;

/// The two states of a [`ToggleButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    First,
    Second,
}

/// Icons for one button state: at rest and while held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPair {
    pub normal: TextureId,
    pub pressed: TextureId,
}

impl IconPair {
    pub fn new(normal: TextureId, pressed: TextureId) -> Self {
        IconPair { normal, pressed }
    }

    /// Same icon whether pressed or not.
    pub fn single(icon: TextureId) -> Self {
        IconPair::new(icon, icon)
    }
}

/// Two-state button, e.g. pause/resume.
///
/// A tap in `First` calls `on_click` then moves to `Second`; a tap in
/// `Second` calls `on_click2` then moves back. Nothing else can change the
/// state, so the icon shown always matches the last callback made.
pub struct ToggleButton {
    bounds: ScreenRect,
    first_icons: IconPair,
    second_icons: IconPair,
    on_click: Box<dyn FnMut()>,
    on_click2: Box<dyn FnMut()>,
    state: ToggleState,
    pressed: bool,
}

impl ToggleButton {
    pub fn new<F1, F2>(
        bounds: ScreenRect,
        first_icons: IconPair,
        second_icons: IconPair,
        on_click: F1,
        on_click2: F2,
    ) -> Self
    where
        F1: FnMut() + 'static,
        F2: FnMut() + 'static,
    {
        ToggleButton {
            bounds,
            first_icons,
            second_icons,
            on_click: Box::new(on_click),
            on_click2: Box::new(on_click2),
            state: ToggleState::First,
            pressed: false,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Icon drawn in the current state.
    pub fn current_icon(&self) -> TextureId {
        let icons = match self.state {
            ToggleState::First => self.first_icons,
            ToggleState::Second => self.second_icons,
        };
        if self.pressed {
            icons.pressed
        } else {
            icons.normal
        }
    }
}

impl Control for ToggleButton {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_texture(self.current_icon(), None, self.bounds);
    }

    fn bounds(&self) -> Option<ScreenRect> {
        Some(self.bounds)
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn on_tap(&mut self) {
        self.state = match self.state {
            ToggleState::First => {
                (self.on_click)();
                ToggleState::Second
            }
            ToggleState::Second => {
                (self.on_click2)();
                ToggleState::First
            }
        };
        debug!(state = ?self.state, "toggle button flipped");
    }
}

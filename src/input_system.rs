use crate::hud::TouchEvent;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can trigger
///
/// Raw SDL input is translated into these before the game loop sees it, so
/// the loop never matches on SDL types.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    /// Pointer input for the HUD; taps the HUD doesn't consume go to the
    /// playfield.
    Touch(TouchEvent),
    /// Send a creep down the lane
    SpawnCreep,
    ToggleDebugHud,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Playing,
    /// Only HUD input, overlays and quit get through
    Paused,
}

/// Processes SDL2 events and produces [`GameAction`]s.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Call before [`poll_events`](Self::poll_events) each frame.
    pub fn update_context(&mut self, paused: bool) {
        self.context = if paused {
            InputContext::Paused
        } else {
            InputContext::Playing
        };
    }

    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_keydown(*key),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::Touch(TouchEvent::Down {
                x: *x as f32,
                y: *y as f32,
            })),
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::Touch(TouchEvent::Up {
                x: *x as f32,
                y: *y as f32,
            })),
            Event::Window {
                win_event: WindowEvent::FocusLost | WindowEvent::Leave,
                ..
            } => Some(GameAction::Touch(TouchEvent::Cancel)),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Escape => Some(GameAction::Quit),
            Keycode::F3 => Some(GameAction::ToggleDebugHud),
            Keycode::Space if self.context == InputContext::Playing => {
                Some(GameAction::SpawnCreep)
            }
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

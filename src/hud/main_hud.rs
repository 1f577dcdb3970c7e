use super::{FractionalRect, Hud, HudLayout, IconPair, ReadOnlyDisplay, ToggleButton};
use crate::game::GameControl;
use crate::player::PlayerStats;
use crate::resources::{StringKey, StringResources};
use crate::surface::{Color, HorizontalAlign, Paint, TextureId, VerticalAlign};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Textures for the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainHudIcons {
    /// Shown while the game runs; tapping it pauses.
    pub pause: IconPair,
    /// Shown while paused; tapping it resumes.
    pub play: IconPair,
}

impl MainHudIcons {
    pub fn new(pause: TextureId, play: TextureId) -> Self {
        MainHudIcons {
            pause: IconPair::single(pause),
            play: IconPair::single(play),
        }
    }
}

/// Adds the in-match HUD: the play/pause toggle in the top-right corner and
/// the score, money and health readouts along the top edge. Each readout
/// starts at its anchor (`margin_x`, 1/3 and 2/3 of the width).
pub fn build_main_hud<P, G>(
    hud: &mut Hud,
    player: Rc<RefCell<P>>,
    game: Rc<RefCell<G>>,
    strings: &dyn StringResources,
    layout: &HudLayout,
    icons: MainHudIcons,
) where
    P: PlayerStats + 'static,
    G: GameControl + 'static,
{
    let margin_x = layout.margin_x();
    let button_side_x = layout.button_side_x();

    let toggle_bounds = layout.resolve(FractionalRect::new(
        1.0 - margin_x - button_side_x,
        layout.margin_y,
        0.0,
        layout.button_side_y,
    ));
    let (pausing, resuming) = (Rc::clone(&game), game);
    hud.add_control(ToggleButton::new(
        toggle_bounds,
        icons.pause,
        icons.play,
        move || pausing.borrow_mut().pause(),
        move || resuming.borrow_mut().resume(),
    ));

    let paint = Paint::new(Color::WHITE, layout.text_size);
    let text_y = layout.to_pixels_y(layout.button_side_y / 2.0 + layout.margin_y);

    let score_player = Rc::clone(&player);
    hud.add_control(ReadOnlyDisplay::new(
        layout.to_pixels_x(margin_x),
        text_y,
        strings.string(StringKey::HudScore),
        HorizontalAlign::Right,
        VerticalAlign::Center,
        paint.clone(),
        move || score_player.borrow().score().to_string(),
    ));

    let money_player = Rc::clone(&player);
    hud.add_control(ReadOnlyDisplay::new(
        layout.to_pixels_x(1.0 / 3.0),
        text_y,
        strings.string(StringKey::HudMoney),
        HorizontalAlign::Right,
        VerticalAlign::Center,
        paint.clone(),
        move || money_player.borrow().money().to_string(),
    ));

    hud.add_control(ReadOnlyDisplay::new(
        layout.to_pixels_x(2.0 / 3.0),
        text_y,
        strings.string(StringKey::HudHealth),
        HorizontalAlign::Right,
        VerticalAlign::Center,
        paint,
        move || player.borrow().health().to_string(),
    ));

    debug!(controls = hud.len(), ?toggle_bounds, "main HUD built");
}

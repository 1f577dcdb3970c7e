use std::cell::RefCell;
use std::rc::Rc;

use sdl2::render::BlendMode;
use towerdefense::animation::AnimationConfig;
use towerdefense::backend::{SdlSurface, TextureRegistry};
use towerdefense::game::{Battlefield, DebugOverlay, GameManager};
use towerdefense::hud::{build_main_hud, Hud, HudLayout, MainHudIcons};
use towerdefense::input_system::{GameAction, InputSystem};
use towerdefense::lane::{self, Creep, CreepAnimation, Tower};
use towerdefense::player::{Player, PlayerStats};
use towerdefense::resources::StringTable;
use towerdefense::settings::{JsonPreferences, PreferenceKey};
use towerdefense::sprite::SpriteSheet;
use towerdefense::surface::{Color, Paint, Surface, TextureId};
use towerdefense::transform::DrawTransform;
use tracing::{info, warn};

// Logical resolution, 16:10 to match the HUD's assumed aspect ratio
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 400;

/// Pixels per world unit
const TILE: f32 = 32.0;
const LANE_LENGTH: f32 = 18.0;
const LANE_Y: f32 = 0.0;
const SPAWN_INTERVAL: u64 = 120;

/// Pick the largest integer window scale that fits the monitor
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;
            let scale = (usable_w / GAME_WIDTH as i32).min(usable_h / GAME_HEIGHT as i32);
            scale.clamp(1, 4) as u32
        }
        Err(e) => {
            warn!(error = %e, "could not detect monitor size, using 2x scale");
            2
        }
    }
}

fn spawn_creep(config: Option<&AnimationConfig>, texture: TextureId) -> Creep {
    let sprite = match config.map(|c| c.build_sprite_sheet(texture, CreepAnimation::Walk)) {
        Some(Ok(sheet)) => sheet,
        Some(Err(e)) => {
            warn!(error = %e, "invalid creep animations, drawing placeholder");
            SpriteSheet::new(texture, CreepAnimation::Walk)
        }
        None => SpriteSheet::new(texture, CreepAnimation::Walk),
    };
    let mut creep = Creep::new(sprite, 5, 6, 0.04, LANE_LENGTH);
    creep.body_mut().set_position(0.0, LANE_Y);
    creep
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    info!(scale = window_scale, "window scale chosen");

    let window = video_subsystem
        .window(
            "Tower Defense",
            GAME_WIDTH * window_scale,
            GAME_HEIGHT * window_scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let mut textures = TextureRegistry::new(&texture_creator);
    let creep_texture = textures.load("assets/sprites/creep.png");
    let icons = MainHudIcons::new(
        textures.load("assets/sprites/pause.png"),
        textures.load("assets/sprites/play.png"),
    );

    let creep_config = AnimationConfig::load_from_file("assets/config/creep_animations.json")
        .map_err(|e| warn!(error = %e, "failed to load creep animations"))
        .ok();
    let strings = StringTable::load_or_default("assets/config/strings.json");
    let mut preferences = JsonPreferences::load(JsonPreferences::default_path());

    let player = Rc::new(RefCell::new(Player::new(100, 10)));
    let game = Rc::new(RefCell::new(GameManager::new()));

    let layout = HudLayout {
        text_size: 14.0,
        ..HudLayout::for_screen(GAME_WIDTH, GAME_HEIGHT)
    };
    let mut hud = Hud::new();
    build_main_hud(
        &mut hud,
        Rc::clone(&player),
        Rc::clone(&game),
        &strings,
        &layout,
        icons,
    );

    // Lane runs across the middle of the screen
    let transform = DrawTransform::new(TILE, TILE / 2.0, GAME_HEIGHT as f32 / 2.0 - TILE / 2.0);
    let mut battlefield: Battlefield<Creep> = Battlefield::new();
    let mut tower = Tower::new(LANE_LENGTH / 2.0, LANE_Y - 1.0, 3.0, 1, 20);
    let mut debug_paint = Paint::new(Color::WHITE, 10.0);

    let mut input = InputSystem::new();
    let mut event_pump = sdl_context.event_pump()?;

    info!("Space - spawn a creep, F3 - toggle debug HUD, Esc - quit");

    'running: loop {
        input.update_context(game.borrow().is_paused());
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Touch(event) => {
                    hud.handle_touch(event);
                }
                GameAction::SpawnCreep => {
                    battlefield.spawn(spawn_creep(creep_config.as_ref(), creep_texture));
                }
                GameAction::ToggleDebugHud => {
                    let enabled = preferences.toggle(PreferenceKey::DEBUG_DESTRUCTIBLE, true);
                    info!(enabled, "debug HUD toggled");
                    if let Err(e) = preferences.save() {
                        warn!(error = %e, path = %preferences.path().display(), "failed to save preferences");
                    }
                }
            }
        }

        let simulate = game.borrow_mut().tick();
        if simulate {
            if game.borrow().frame() % SPAWN_INTERVAL == 1 {
                battlefield.spawn(spawn_creep(creep_config.as_ref(), creep_texture));
            }
            tower.update(battlefield.units_mut());
        }
        battlefield.update(&game.borrow());

        canvas.set_draw_color(sdl2::pixels::Color::RGB(30, 40, 30));
        canvas.clear();
        {
            let mut surface = SdlSurface::new(&mut canvas, &textures);
            surface.fill_rect(
                transform.to_screen_rect(0.0, LANE_Y, LANE_LENGTH, 1.0),
                Color::rgb(120, 100, 70),
            );
            surface.fill_rect(
                transform.to_screen_rect(tower.x - 0.5, tower.y - 0.5, 1.0, 1.0),
                Color::rgb(90, 90, 160),
            );
            battlefield.draw(
                &mut surface,
                &transform,
                Some(DebugOverlay {
                    paint: &mut debug_paint,
                    preferences: &preferences,
                }),
            );
            hud.draw(&mut surface);
        }

        let removed = battlefield.remove_out_of_play();
        lane::settle(&mut player.borrow_mut(), &removed);
        if player.borrow().is_defeated() {
            info!(score = player.borrow().score(), "all lives lost");
            break 'running;
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

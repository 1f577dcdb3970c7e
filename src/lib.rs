//! Tower-defense entity core and HUD
//!
//! Units are built around [`unit::Destructible`] and driven once per frame by
//! a [`game::Battlefield`]. The HUD ([`hud`]) sits on top of the playfield and
//! reads player state live. Everything draws through [`surface::Surface`], so
//! the whole crate runs headless in tests; the SDL2 window backend and input
//! translation are behind the `sdl` feature.

pub mod animation;
pub mod font;
pub mod game;
pub mod hud;
pub mod lane;
pub mod player;
pub mod resources;
pub mod settings;
pub mod sprite;
pub mod surface;
pub mod transform;
pub mod ui;
pub mod unit;

#[cfg(feature = "sdl")]
pub mod backend;
#[cfg(feature = "sdl")]
pub mod input_system;

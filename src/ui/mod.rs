//! World-space HUD components
//!
//! Widgets drawn above units on the playfield, from a unit kind's
//! `draw_hud` hook. They hold style only, never unit references, so one
//! instance is shared by every unit that uses it.

pub mod health_bar;

pub use health_bar::{HealthBar, HealthBarStyle};

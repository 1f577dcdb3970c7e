//! The shared core of every damageable unit
//!
//! A [`Destructible`] owns the unit's position and size (world units), its
//! combat stats and its sprite. It maps itself to screen space at draw time
//! with the frame's [`DrawTransform`], so resizing the window or scrolling the
//! playfield never touches unit state.
//!
//! # Health
//!
//! Health is a plain integer that damage subtracts from without clamping.
//! It can go negative, and hitting a dead unit again is legal:
//!
//! ```rust
//! # use towerdefense::animation::AnimationId;
//! # use towerdefense::sprite::SpriteSheet;
//! # use towerdefense::surface::TextureId;
//! # use towerdefense::unit::{Destructible, Offensive, Lifecycle};
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! # enum Anim { Walk }
//! # impl AnimationId for Anim {
//! #     const ALL: &'static [Self] = &[Anim::Walk];
//! #     fn key(self) -> &'static str { "walk" }
//! # }
//! struct Arrow;
//! impl Offensive for Arrow {
//!     fn damage(&self) -> i32 { 4 }
//! }
//!
//! let sprite = SpriteSheet::new(TextureId(0), Anim::Walk);
//! let mut creep = Destructible::new(sprite, 1.0, 1.0, 2, 6);
//! creep.receive_damages(&Arrow);
//! assert!(!creep.is_dead());
//! creep.receive_damages(&Arrow);
//! assert_eq!(creep.health(), -2);
//! assert!(creep.is_dead());
//! ```

use super::{Drawable, HudRenderable, Lifecycle, Offensive};
use crate::animation::AnimationId;
use crate::settings::{PreferenceKey, Preferences};
use crate::sprite::{Sprite, SpriteSheet};
use crate::surface::{Color, HorizontalAlign, Paint, Surface, VerticalAlign};
use crate::transform::{DrawTransform, Point};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Weight and health of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatStats {
    /// Used elsewhere to price the unit or reward its destruction
    weight: i32,
    health: i32,
}

impl CombatStats {
    pub fn new(weight: i32, health: i32) -> Self {
        CombatStats { weight, health }
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// Positioned, sized, animated unit with health.
///
/// `A` is the unit kind's animation id enum; `S` is the sprite handle, a
/// [`SpriteSheet`] unless the renderer provides its own.
#[derive(Debug, Clone)]
pub struct Destructible<A: AnimationId, S: Sprite<A> = SpriteSheet<A>> {
    sprite: S,
    /// Top-left corner on the playfield, in tiles
    position: Point,
    width: f32,
    height: f32,
    stats: CombatStats,
    _animation: PhantomData<A>,
}

impl<A: AnimationId, S: Sprite<A>> Destructible<A, S> {
    /// Creates a unit at the origin. Size and weight are fixed for life.
    pub fn new(sprite: S, width: f32, height: f32, weight: i32, health: i32) -> Self {
        Destructible {
            sprite,
            position: Point::default(),
            width,
            height,
            stats: CombatStats::new(weight, health),
            _animation: PhantomData,
        }
    }

    /// Subtracts the attacker's damage from health.
    pub fn receive_damages<O: Offensive + ?Sized>(&mut self, attacker: &O) {
        let was_dead = self.stats.is_dead();
        let damage = attacker.damage();
        self.stats.take_damage(damage);

        if !was_dead && self.stats.is_dead() {
            debug!(health = self.stats.health(), damage, "unit destroyed");
        }
    }

    pub fn health(&self) -> i32 {
        self.stats.health()
    }

    pub fn weight(&self) -> i32 {
        self.stats.weight()
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn pos_x(&self) -> f32 {
        self.position.x
    }

    pub fn pos_y(&self) -> f32 {
        self.position.y
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.height / 2.0
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position.set(x, y);
    }

    pub fn offset_position(&mut self, dx: f32, dy: f32) {
        self.position.offset(dx, dy);
    }

    pub fn animation_id(&self) -> A {
        self.sprite.animation_id()
    }

    /// Switches the sprite to `animation_id`.
    ///
    /// Requesting the clip that is already playing does nothing, so game
    /// logic can ask for its desired state every frame without restarting it.
    pub fn change_animation(&mut self, animation_id: A) {
        if animation_id == self.sprite.animation_id() {
            return;
        }
        trace!(from = ?self.sprite.animation_id(), to = ?animation_id, "animation changed");
        self.sprite.set_animation_id(animation_id);
    }

    /// Advances the sprite by one tick. Call once per frame, independently of drawing.
    pub fn update_animation(&mut self) {
        self.sprite.update_animation_frame();
    }

    pub fn sprite(&self) -> &S {
        &self.sprite
    }
}

impl<A: AnimationId, S: Sprite<A>> Drawable for Destructible<A, S> {
    fn draw(&mut self, surface: &mut dyn Surface, transform: &DrawTransform) {
        let bounds = transform.to_screen_rect(
            self.position.x,
            self.position.y,
            self.width,
            self.height,
        );
        self.sprite
            .set_dimensions(bounds.left, bounds.top, bounds.right, bounds.bottom);
        self.sprite.draw(surface);
    }
}

impl<A: AnimationId, S: Sprite<A>> HudRenderable for Destructible<A, S> {
    /// Draws "<health> HP" in red, centered above the unit, unless
    /// [`PreferenceKey::DEBUG_DESTRUCTIBLE`] is switched off.
    fn draw_debug_hud(
        &self,
        surface: &mut dyn Surface,
        transform: &DrawTransform,
        paint: &mut Paint,
        preferences: &dyn Preferences,
    ) {
        if !preferences.get_bool(PreferenceKey::DEBUG_DESTRUCTIBLE, true) {
            return;
        }

        let mut paint = paint.scoped();
        paint.color = Color::RED;

        let hp_text = format!("{} HP", self.stats.health());
        surface.draw_text(
            &hp_text,
            transform.to_screen_x(self.center_x()),
            transform.to_screen_y(self.position.y),
            HorizontalAlign::Center,
            VerticalAlign::Top,
            &paint,
        );
    }
}

impl<A: AnimationId, S: Sprite<A>> Lifecycle for Destructible<A, S> {
    fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }
}

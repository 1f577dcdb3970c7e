//! A single lane: creeps walk toward the exit, a tower shoots them
//!
//! [`Creep`] is a unit kind built on [`Destructible`]. It plays its `Die`
//! clip once after being killed and leaves play when the clip ends, or when
//! it walks off the end of the lane. [`Tower`] is the attacker.
//! [`settle`] turns removed creeps into score, money and lost health.

use crate::animation::AnimationId;
use crate::game::Unit;
use crate::player::{Player, PlayerStats};
use crate::settings::Preferences;
use crate::sprite::SpriteSheet;
use crate::surface::{Paint, Surface};
use crate::transform::DrawTransform;
use crate::ui::HealthBar;
use crate::unit::{Destructible, Drawable, HudRenderable, Lifecycle, Offensive};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreepAnimation {
    Walk,
    Die,
}

impl AnimationId for CreepAnimation {
    const ALL: &'static [Self] = &[CreepAnimation::Walk, CreepAnimation::Die];

    fn key(self) -> &'static str {
        match self {
            CreepAnimation::Walk => "walk",
            CreepAnimation::Die => "die",
        }
    }
}

pub struct Creep {
    body: Destructible<CreepAnimation>,
    max_health: i32,
    /// World units per frame
    speed: f32,
    lane_end: f32,
    health_bar: HealthBar,
}

impl Creep {
    /// A 1x1 creep at the start of the lane.
    pub fn new(
        sprite: SpriteSheet<CreepAnimation>,
        weight: i32,
        health: i32,
        speed: f32,
        lane_end: f32,
    ) -> Self {
        Creep {
            body: Destructible::new(sprite, 1.0, 1.0, weight, health),
            max_health: health,
            speed,
            lane_end,
            health_bar: HealthBar::new(),
        }
    }

    pub fn body(&self) -> &Destructible<CreepAnimation> {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Destructible<CreepAnimation> {
        &mut self.body
    }

    pub fn reached_end(&self) -> bool {
        self.body.pos_x() >= self.lane_end
    }

    fn health_percentage(&self) -> f32 {
        self.body.health() as f32 / self.max_health.max(1) as f32
    }
}

impl Drawable for Creep {
    fn draw(&mut self, surface: &mut dyn Surface, transform: &DrawTransform) {
        self.body.draw(surface, transform);
    }
}

impl HudRenderable for Creep {
    fn draw_hud(&self, surface: &mut dyn Surface, transform: &DrawTransform) {
        if self.body.is_dead() {
            return;
        }
        let unit_box = transform.to_screen_rect(
            self.body.pos_x(),
            self.body.pos_y(),
            self.body.width(),
            self.body.height(),
        );
        self.health_bar
            .render(surface, unit_box, self.health_percentage());
    }

    fn draw_debug_hud(
        &self,
        surface: &mut dyn Surface,
        transform: &DrawTransform,
        paint: &mut Paint,
        preferences: &dyn Preferences,
    ) {
        self.body
            .draw_debug_hud(surface, transform, paint, preferences);
    }
}

impl Lifecycle for Creep {
    fn is_dead(&self) -> bool {
        self.body.is_dead()
    }

    fn is_out_of_play(&self) -> bool {
        if self.body.is_dead() {
            self.body.animation_id() == CreepAnimation::Die && self.body.sprite().is_finished()
        } else {
            self.reached_end()
        }
    }
}

impl Unit for Creep {
    fn update(&mut self) {
        if self.body.is_dead() {
            self.body.change_animation(CreepAnimation::Die);
        } else {
            self.body.offset_position(self.speed, 0.0);
        }
    }

    fn update_animation(&mut self) {
        self.body.update_animation();
    }
}

/// Fixed tower that damages the first living creep in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub x: f32,
    pub y: f32,
    pub range: f32,
    damage: i32,
    /// Frames between shots
    reload_ticks: u32,
    cooldown: u32,
}

impl Tower {
    pub fn new(x: f32, y: f32, range: f32, damage: i32, reload_ticks: u32) -> Self {
        Tower {
            x,
            y,
            range,
            damage,
            reload_ticks,
            cooldown: 0,
        }
    }

    fn in_range(&self, creep: &Creep) -> bool {
        let dx = creep.body.center_x() - self.x;
        let dy = creep.body.center_y() - self.y;
        dx * dx + dy * dy <= self.range * self.range
    }

    /// One frame of tower logic. Returns the index of the creep hit, if any.
    pub fn update(&mut self, creeps: &mut [Creep]) -> Option<usize> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        let index = creeps
            .iter()
            .position(|creep| !creep.is_dead() && self.in_range(creep))?;
        creeps[index].body.receive_damages(&*self);
        self.cooldown = self.reload_ticks;
        Some(index)
    }
}

impl Offensive for Tower {
    fn damage(&self) -> i32 {
        self.damage
    }
}

/// Applies the outcome of creeps that left play: killed creeps are worth
/// their weight in score and money, escaped ones cost the player a life.
pub fn settle(player: &mut Player, removed: &[Creep]) {
    for creep in removed {
        if creep.is_dead() {
            let reward = i64::from(creep.body.weight());
            player.add_score(reward);
            player.earn(reward);
        } else {
            player.lose_health(1);
            debug!(health = player.health(), "creep escaped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationMode;
    use crate::game::{Battlefield, GameManager};
    use crate::sprite::Frame;
    use crate::surface::{RecordingSurface, SourceRect, TextureId};

    fn sheet() -> SpriteSheet<CreepAnimation> {
        let frame = |x| Frame::new(SourceRect { x, y: 0, width: 16, height: 16 }, 1);
        let mut sheet = SpriteSheet::new(TextureId(1), CreepAnimation::Walk);
        sheet.add_animation(CreepAnimation::Walk, vec![frame(0), frame(16)], AnimationMode::Loop);
        sheet.add_animation(CreepAnimation::Die, vec![frame(32), frame(48)], AnimationMode::Once);
        sheet
    }

    fn creep(health: i32) -> Creep {
        Creep::new(sheet(), 5, health, 0.5, 10.0)
    }

    #[test]
    fn test_creep_walks_and_escapes() {
        let mut field = Battlefield::new();
        field.spawn(creep(3));
        let game = GameManager::new();
        for _ in 0..19 {
            field.update(&game);
        }
        assert!(field.remove_out_of_play().is_empty());
        field.update(&game);
        let removed = field.remove_out_of_play();
        assert_eq!(removed.len(), 1);
        assert!(removed[0].reached_end());

        let mut player = Player::new(0, 3);
        settle(&mut player, &removed);
        assert_eq!(player.health(), 2);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_dead_creep_plays_death_before_leaving() {
        let mut field = Battlefield::new();
        field.spawn(creep(1));
        let mut tower = Tower::new(0.5, 0.5, 2.0, 1, 10);
        assert_eq!(tower.update(field.units_mut()), Some(0));
        assert!(field.units()[0].is_dead());

        let game = GameManager::new();
        // Die has two one-tick frames: the first update switches to it and
        // advances to its last frame, the second stops there since it plays once
        field.update(&game);
        assert_eq!(field.units()[0].body().animation_id(), CreepAnimation::Die);
        assert!(field.remove_out_of_play().is_empty());
        field.update(&game);

        let removed = field.remove_out_of_play();
        assert_eq!(removed.len(), 1);
        let mut player = Player::new(0, 3);
        settle(&mut player, &removed);
        assert_eq!(player.score(), 5);
        assert_eq!(player.money(), 5);
        assert_eq!(player.health(), 3);
    }

    #[test]
    fn test_tower_reloads_and_skips_out_of_range() {
        let mut creeps = vec![creep(10), creep(10)];
        creeps[0].body_mut().set_position(8.0, 0.0);
        let mut tower = Tower::new(0.5, 0.5, 2.0, 3, 2);

        assert_eq!(tower.update(&mut creeps), Some(1));
        assert_eq!(tower.update(&mut creeps), None);
        assert_eq!(tower.update(&mut creeps), None);
        assert_eq!(tower.update(&mut creeps), Some(1));
        assert_eq!(creeps[1].body().health(), 4);
        assert_eq!(creeps[0].body().health(), 10);
    }

    #[test]
    fn test_health_bar_only_when_hurt_and_alive() {
        let mut unit = creep(4);
        let mut surface = RecordingSurface::new(100, 100);
        let transform = DrawTransform::new(32.0, 0.0, 40.0);

        unit.draw_hud(&mut surface, &transform);
        assert!(surface.calls().is_empty());

        unit.body_mut().receive_damages(&Tower::new(0.0, 0.0, 1.0, 2, 0));
        unit.draw_hud(&mut surface, &transform);
        assert!(!surface.calls().is_empty());

        surface.clear();
        unit.body_mut().receive_damages(&Tower::new(0.0, 0.0, 1.0, 2, 0));
        unit.draw_hud(&mut surface, &transform);
        assert!(surface.calls().is_empty());
    }
}

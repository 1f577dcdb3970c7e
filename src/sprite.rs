use crate::animation::{AnimationId, AnimationMode};
use crate::surface::{Color, SourceRect, Surface, TextureId};
use crate::transform::ScreenRect;
use std::collections::HashMap;

/// Renderable handle keyed by a unit kind's animation ids.
///
/// The entity core only ever talks to its sprite through this trait: it
/// pushes screen bounds, asks for a draw, ticks the animation and swaps the
/// active clip. Everything else (textures, frame timing) belongs to the
/// implementation.
pub trait Sprite<A: AnimationId> {
    fn set_dimensions(&mut self, left: f32, top: f32, right: f32, bottom: f32);

    fn draw(&self, surface: &mut dyn Surface);

    /// Advances the frame cursor by one tick.
    fn update_animation_frame(&mut self);

    fn animation_id(&self) -> A;

    /// Swaps the active clip and restarts it from its first frame.
    fn set_animation_id(&mut self, id: A);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub source: SourceRect,
    /// How many ticks the frame stays on screen (0 is treated as 1)
    pub duration_ticks: u32,
}

impl Frame {
    pub fn new(source: SourceRect, duration_ticks: u32) -> Self {
        Frame {
            source,
            duration_ticks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
struct Clip {
    frames: Vec<Frame>,
    mode: AnimationMode,
}

/// Tick-driven sprite sheet: one texture, one clip per animation id.
#[derive(Debug, Clone)]
pub struct SpriteSheet<A: AnimationId> {
    texture: TextureId,
    clips: HashMap<A, Clip>,
    animation_id: A,
    current_frame: usize,
    ticks_in_frame: u32,
    is_playing: bool,
    play_direction: PlayDirection,
    bounds: ScreenRect,
}

impl<A: AnimationId> SpriteSheet<A> {
    pub fn new(texture: TextureId, initial: A) -> Self {
        SpriteSheet {
            texture,
            clips: HashMap::new(),
            animation_id: initial,
            current_frame: 0,
            ticks_in_frame: 0,
            is_playing: true,
            play_direction: PlayDirection::Forward,
            bounds: ScreenRect::default(),
        }
    }

    pub fn add_animation(&mut self, id: A, frames: Vec<Frame>, mode: AnimationMode) {
        self.clips.insert(id, Clip { frames, mode });
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.ticks_in_frame = 0;
        self.play_direction = PlayDirection::Forward;
        self.is_playing = true;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self, id: A) -> usize {
        self.clips.get(&id).map_or(0, |clip| clip.frames.len())
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True once a `Once` clip has stopped on its last frame.
    pub fn is_finished(&self) -> bool {
        !self.is_playing
    }

    /// Screen bounds from the last `set_dimensions` call.
    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    fn advance_frame(&mut self) {
        let Some(clip) = self.clips.get(&self.animation_id) else {
            return;
        };
        let len = clip.frames.len();

        match clip.mode {
            AnimationMode::Loop => {
                self.current_frame = (self.current_frame + 1) % len;
            }
            AnimationMode::PingPong => match self.play_direction {
                PlayDirection::Forward => {
                    if self.current_frame + 1 < len {
                        self.current_frame += 1;
                    } else {
                        self.play_direction = PlayDirection::Backward;
                        self.current_frame = self.current_frame.saturating_sub(1);
                    }
                }
                PlayDirection::Backward => {
                    if self.current_frame > 0 {
                        self.current_frame -= 1;
                    } else {
                        self.play_direction = PlayDirection::Forward;
                        self.current_frame = 1.min(len - 1);
                    }
                }
            },
            AnimationMode::Once => {
                if self.current_frame + 1 < len {
                    self.current_frame += 1;
                } else {
                    self.is_playing = false;
                }
            }
        }
    }
}

impl<A: AnimationId> Sprite<A> for SpriteSheet<A> {
    fn set_dimensions(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.bounds = ScreenRect::new(left, top, right, bottom);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let frame = self
            .clips
            .get(&self.animation_id)
            .and_then(|clip| clip.frames.get(self.current_frame));

        match frame {
            Some(frame) => surface.draw_texture(self.texture, Some(frame.source), self.bounds),
            // Placeholder so a missing clip is visible rather than silent
            None => surface.fill_rect(self.bounds, Color::MAGENTA),
        }
    }

    fn update_animation_frame(&mut self) {
        if !self.is_playing {
            return;
        }
        let Some(frame) = self
            .clips
            .get(&self.animation_id)
            .and_then(|clip| clip.frames.get(self.current_frame))
        else {
            return;
        };

        self.ticks_in_frame += 1;
        if self.ticks_in_frame >= frame.duration_ticks.max(1) {
            self.ticks_in_frame = 0;
            self.advance_frame();
        }
    }

    fn animation_id(&self) -> A {
        self.animation_id
    }

    fn set_animation_id(&mut self, id: A) {
        self.animation_id = id;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Anim {
        Idle,
        Fire,
        Empty,
    }

    impl AnimationId for Anim {
        const ALL: &'static [Self] = &[Anim::Idle, Anim::Fire, Anim::Empty];

        fn key(self) -> &'static str {
            match self {
                Anim::Idle => "idle",
                Anim::Fire => "fire",
                Anim::Empty => "empty",
            }
        }
    }

    fn frames(count: i32, duration_ticks: u32) -> Vec<Frame> {
        (0..count)
            .map(|i| {
                Frame::new(
                    SourceRect {
                        x: i * 8,
                        y: 0,
                        width: 8,
                        height: 8,
                    },
                    duration_ticks,
                )
            })
            .collect()
    }

    fn tick(sheet: &mut SpriteSheet<Anim>, times: usize) -> Vec<usize> {
        (0..times)
            .map(|_| {
                sheet.update_animation_frame();
                sheet.current_frame()
            })
            .collect()
    }

    #[test]
    fn test_loop_mode_wraps() {
        let mut sheet = SpriteSheet::new(TextureId(1), Anim::Idle);
        sheet.add_animation(Anim::Idle, frames(3, 1), AnimationMode::Loop);
        assert_eq!(tick(&mut sheet, 4), vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_frame_duration_in_ticks() {
        let mut sheet = SpriteSheet::new(TextureId(1), Anim::Idle);
        sheet.add_animation(Anim::Idle, frames(2, 3), AnimationMode::Loop);
        assert_eq!(tick(&mut sheet, 6), vec![0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_ping_pong_mode() {
        let mut sheet = SpriteSheet::new(TextureId(1), Anim::Idle);
        sheet.add_animation(Anim::Idle, frames(3, 1), AnimationMode::PingPong);
        assert_eq!(tick(&mut sheet, 6), vec![1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_once_mode_stops_on_last_frame() {
        let mut sheet = SpriteSheet::new(TextureId(1), Anim::Fire);
        sheet.add_animation(Anim::Fire, frames(2, 1), AnimationMode::Once);
        assert_eq!(tick(&mut sheet, 3), vec![1, 1, 1]);
        assert!(sheet.is_finished());
    }

    #[test]
    fn test_set_animation_id_restarts_clip() {
        let mut sheet = SpriteSheet::new(TextureId(1), Anim::Fire);
        sheet.add_animation(Anim::Fire, frames(2, 1), AnimationMode::Once);
        sheet.add_animation(Anim::Idle, frames(3, 1), AnimationMode::Loop);
        tick(&mut sheet, 3);
        assert!(sheet.is_finished());

        sheet.set_animation_id(Anim::Idle);
        assert_eq!(sheet.animation_id(), Anim::Idle);
        assert_eq!(sheet.current_frame(), 0);
        assert!(sheet.is_playing());
    }

    #[test]
    fn test_draw_uses_bounds_and_current_frame() {
        let mut sheet = SpriteSheet::new(TextureId(7), Anim::Idle);
        sheet.add_animation(Anim::Idle, frames(2, 1), AnimationMode::Loop);
        sheet.set_dimensions(10.0, 20.0, 42.0, 52.0);
        sheet.update_animation_frame();

        let mut surface = RecordingSurface::new(100, 100);
        sheet.draw(&mut surface);
        assert_eq!(
            surface.calls(),
            &[DrawCall::Texture {
                texture: TextureId(7),
                source: Some(SourceRect {
                    x: 8,
                    y: 0,
                    width: 8,
                    height: 8
                }),
                dest: ScreenRect::new(10.0, 20.0, 42.0, 52.0),
            }]
        );
    }

    #[test]
    fn test_missing_clip_draws_placeholder_and_never_ticks() {
        let mut sheet = SpriteSheet::new(TextureId(7), Anim::Empty);
        sheet.set_dimensions(0.0, 0.0, 4.0, 4.0);
        sheet.update_animation_frame();
        assert_eq!(sheet.current_frame(), 0);

        let mut surface = RecordingSurface::new(10, 10);
        sheet.draw(&mut surface);
        assert!(matches!(
            surface.calls()[0],
            DrawCall::Rect { color: Color::MAGENTA, .. }
        ));
    }
}

use crate::sprite::{Frame, SpriteSheet};
use crate::surface::{SourceRect, TextureId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

/// A closed, unit-specific set of animation identifiers.
///
/// Each unit kind declares its own enum (idle/walk/attack/die for a creep,
/// idle/fire for a tower, ...) and lists every variant in `ALL`. The key is
/// the name used in animation config files.
///
/// ```rust
/// use towerdefense::animation::AnimationId;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum TowerAnimation {
///     Idle,
///     Fire,
/// }
///
/// impl AnimationId for TowerAnimation {
///     const ALL: &'static [Self] = &[TowerAnimation::Idle, TowerAnimation::Fire];
///
///     fn key(self) -> &'static str {
///         match self {
///             TowerAnimation::Idle => "idle",
///             TowerAnimation::Fire => "fire",
///         }
///     }
/// }
///
/// assert_eq!(TowerAnimation::from_key("fire"), Some(TowerAnimation::Fire));
/// assert_eq!(TowerAnimation::from_key("walk"), None);
/// ```
pub trait AnimationId: Copy + Eq + Hash + Debug + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }
}

/// How a clip behaves once it reaches its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// 0-1-2-0-1-2...
    #[default]
    Loop,
    /// 0-1-2-1-0-1-2...
    PingPong,
    /// 0-1-2 then stop on the last frame
    Once,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub animations: HashMap<String, AnimationData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationData {
    pub frames: Vec<FrameData>,
    #[serde(default)]
    pub mode: AnimationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub x: i32,
    pub y: i32,
    pub duration_ticks: u32,
}

impl FrameData {
    pub fn to_frame(&self, width: u32, height: u32) -> Frame {
        Frame::new(
            SourceRect {
                x: self.x,
                y: self.y,
                width,
                height,
            },
            self.duration_ticks,
        )
    }
}

/// Errors raised while loading animation configs.
#[derive(Debug)]
pub enum AnimationError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    /// The config names a clip the unit kind doesn't declare
    UnknownAnimation(String),
    /// The unit kind declares a clip the config doesn't provide
    MissingAnimation(&'static str),
    EmptyAnimation(&'static str),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::IoError(e) => write!(f, "IO error: {}", e),
            AnimationError::ParseError(e) => write!(f, "Invalid animation config: {}", e),
            AnimationError::UnknownAnimation(key) => write!(f, "Unknown animation: {}", key),
            AnimationError::MissingAnimation(key) => write!(f, "Missing animation: {}", key),
            AnimationError::EmptyAnimation(key) => write!(f, "Animation has no frames: {}", key),
        }
    }
}

impl std::error::Error for AnimationError {}

impl From<std::io::Error> for AnimationError {
    fn from(err: std::io::Error) -> Self {
        AnimationError::IoError(err)
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        AnimationError::ParseError(err)
    }
}

impl AnimationConfig {
    pub fn load_from_file(path: &str) -> Result<Self, AnimationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn create_frames(&self, key: &str) -> Vec<Frame> {
        self.animations
            .get(key)
            .map(|data| {
                data.frames
                    .iter()
                    .map(|frame_data| frame_data.to_frame(self.frame_width, self.frame_height))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn mode(&self, key: &str) -> AnimationMode {
        self.animations
            .get(key)
            .map(|data| data.mode)
            .unwrap_or_default()
    }

    /// Builds a sprite sheet for unit kind `A`.
    ///
    /// Every key in the config must name a variant of `A`, and every variant
    /// must have at least one frame.
    pub fn build_sprite_sheet<A: AnimationId>(
        &self,
        texture: TextureId,
        initial: A,
    ) -> Result<SpriteSheet<A>, AnimationError> {
        if let Some(unknown) = self.animations.keys().find(|key| A::from_key(key).is_none()) {
            return Err(AnimationError::UnknownAnimation(unknown.clone()));
        }

        let mut sheet = SpriteSheet::new(texture, initial);
        for &id in A::ALL {
            if !self.animations.contains_key(id.key()) {
                return Err(AnimationError::MissingAnimation(id.key()));
            }
            let frames = self.create_frames(id.key());
            if frames.is_empty() {
                return Err(AnimationError::EmptyAnimation(id.key()));
            }
            sheet.add_animation(id, frames, self.mode(id.key()));
        }
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::Sprite;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum CreepAnimation {
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

    const CREEP_CONFIG: &str = r#"{
        "frame_width": 16,
        "frame_height": 16,
        "animations": {
            "walk": {
                "frames": [
                    { "x": 0, "y": 0, "duration_ticks": 4 },
                    { "x": 16, "y": 0, "duration_ticks": 4 }
                ]
            },
            "die": {
                "frames": [{ "x": 0, "y": 16, "duration_ticks": 2 }],
                "mode": "once"
            }
        }
    }"#;

    #[test]
    fn test_from_key_matches_declared_variants() {
        assert_eq!(CreepAnimation::from_key("walk"), Some(CreepAnimation::Walk));
        assert_eq!(CreepAnimation::from_key("die"), Some(CreepAnimation::Die));
        assert_eq!(CreepAnimation::from_key("attack"), None);
    }

    #[test]
    fn test_config_parses_modes_and_frames() {
        let config = AnimationConfig::from_json(CREEP_CONFIG).unwrap();
        assert_eq!(config.mode("walk"), AnimationMode::Loop);
        assert_eq!(config.mode("die"), AnimationMode::Once);

        let frames = config.create_frames("walk");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].source.x, 16);
        assert_eq!(frames[1].source.width, 16);
        assert_eq!(frames[1].duration_ticks, 4);
        assert!(config.create_frames("missing").is_empty());
    }

    #[test]
    fn test_build_sprite_sheet() {
        let config = AnimationConfig::from_json(CREEP_CONFIG).unwrap();
        let sheet = config
            .build_sprite_sheet(TextureId(3), CreepAnimation::Walk)
            .unwrap();
        assert_eq!(sheet.animation_id(), CreepAnimation::Walk);
        assert_eq!(sheet.frame_count(CreepAnimation::Die), 1);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let json = CREEP_CONFIG.replace("\"die\"", "\"explode\"");
        let config = AnimationConfig::from_json(&json).unwrap();
        let result = config.build_sprite_sheet(TextureId(0), CreepAnimation::Walk);
        assert!(matches!(result, Err(AnimationError::UnknownAnimation(key)) if key == "explode"));
    }

    #[test]
    fn test_missing_and_empty_clips_are_rejected() {
        let missing = r#"{ "frame_width": 8, "frame_height": 8, "animations": {
            "walk": { "frames": [{ "x": 0, "y": 0, "duration_ticks": 1 }] } } }"#;
        let config = AnimationConfig::from_json(missing).unwrap();
        assert!(matches!(
            config.build_sprite_sheet(TextureId(0), CreepAnimation::Walk),
            Err(AnimationError::MissingAnimation("die"))
        ));

        let empty = r#"{ "frame_width": 8, "frame_height": 8, "animations": {
            "walk": { "frames": [] },
            "die": { "frames": [{ "x": 0, "y": 0, "duration_ticks": 1 }] } } }"#;
        let config = AnimationConfig::from_json(empty).unwrap();
        assert!(matches!(
            config.build_sprite_sheet(TextureId(0), CreepAnimation::Walk),
            Err(AnimationError::EmptyAnimation("walk"))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            AnimationConfig::from_json("{ not json"),
            Err(AnimationError::ParseError(_))
        ));
    }
}

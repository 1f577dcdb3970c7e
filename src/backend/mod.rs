//! Rendering backends
//!
//! [`sdl::SdlSurface`] implements [`crate::surface::Surface`] on an SDL2
//! window canvas, with textures held in a [`sdl::TextureRegistry`] and text
//! drawn with the built-in bitmap font.

pub mod sdl;

pub use sdl::{SdlSurface, TextureRegistry};

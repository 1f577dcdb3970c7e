use crate::font;
use crate::surface::{
    Color, HorizontalAlign, Paint, SourceRect, Surface, TextureId, VerticalAlign,
};
use crate::transform::ScreenRect;
use sdl2::image::LoadTexture;
use sdl2::pixels;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{info, warn};

/// Textures loaded for the session, addressed by [`TextureId`].
///
/// A path that fails to load still gets an id; drawing it falls back to a
/// placeholder rectangle, so a missing asset never stops the game.
pub struct TextureRegistry<'t> {
    creator: &'t TextureCreator<WindowContext>,
    textures: Vec<Option<Texture<'t>>>,
}

impl<'t> TextureRegistry<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>) -> Self {
        TextureRegistry {
            creator,
            textures: Vec::new(),
        }
    }

    pub fn load(&mut self, path: &str) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        match self.creator.load_texture(path) {
            Ok(texture) => {
                let query = texture.query();
                info!(path, width = query.width, height = query.height, ?id, "texture loaded");
                self.textures.push(Some(texture));
            }
            Err(e) => {
                warn!(path, error = %e, "failed to load texture, drawing placeholder");
                self.textures.push(None);
            }
        }
        id
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture<'t>> {
        self.textures.get(id.0 as usize)?.as_ref()
    }
}

/// [`Surface`] over an SDL2 window canvas for one frame.
pub struct SdlSurface<'a, 't> {
    canvas: &'a mut Canvas<Window>,
    textures: &'a TextureRegistry<'t>,
}

impl<'a, 't> SdlSurface<'a, 't> {
    pub fn new(canvas: &'a mut Canvas<Window>, textures: &'a TextureRegistry<'t>) -> Self {
        SdlSurface { canvas, textures }
    }

    fn fill(&mut self, rect: ScreenRect, color: Color) -> Result<(), String> {
        let Some(rect) = to_sdl_rect(rect) else {
            return Ok(());
        };
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.fill_rect(rect)
    }

    fn copy(
        &mut self,
        texture: TextureId,
        source: Option<SourceRect>,
        dest: ScreenRect,
    ) -> Result<(), String> {
        let Some(dest_rect) = to_sdl_rect(dest) else {
            return Ok(());
        };
        match self.textures.get(texture) {
            Some(tex) => {
                let src = source.map(|s| Rect::new(s.x, s.y, s.width, s.height));
                self.canvas.copy(tex, src, dest_rect)
            }
            None => self.fill(dest, Color::MAGENTA),
        }
    }

    fn text(&mut self, text: &str, left: f32, top: f32, paint: &Paint) -> Result<(), String> {
        let scale = font::scale_for(paint.text_size);
        self.canvas.set_draw_color(to_sdl_color(paint.color));
        for pixel in font::pixel_rects(text, left, top, scale) {
            if let Some(rect) = to_sdl_rect(pixel) {
                self.canvas.fill_rect(rect)?;
            }
        }
        Ok(())
    }
}

impl Surface for SdlSurface<'_, '_> {
    fn size(&self) -> (u32, u32) {
        match self.canvas.logical_size() {
            (0, 0) => self.canvas.output_size().unwrap_or((0, 0)),
            size => size,
        }
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        if let Err(e) = self.fill(rect, color) {
            warn!(error = %e, "fill_rect failed");
        }
    }

    fn draw_texture(&mut self, texture: TextureId, source: Option<SourceRect>, dest: ScreenRect) {
        if let Err(e) = self.copy(texture, source, dest) {
            warn!(error = %e, ?texture, "draw_texture failed");
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
        paint: &Paint,
    ) {
        let scale = font::scale_for(paint.text_size);
        let width = font::text_width(text, scale) as f32;
        let height = (font::GLYPH_HEIGHT * scale) as f32;
        let left = horizontal.left_edge(x, width);
        let top = vertical.top_edge(y, height);
        if let Err(e) = self.text(text, left, top, paint) {
            warn!(error = %e, text, "draw_text failed");
        }
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        font::text_width(text, font::scale_for(paint.text_size)) as f32
    }
}

fn to_sdl_color(color: Color) -> pixels::Color {
    pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

/// Rounds to whole pixels. Empty rectangles have no SDL equivalent.
fn to_sdl_rect(rect: ScreenRect) -> Option<Rect> {
    let left = rect.left.round();
    let top = rect.top.round();
    let width = rect.right.round() - left;
    let height = rect.bottom.round() - top;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Rect::new(left as i32, top as i32, width as u32, height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_rounds_to_pixels() {
        let rect = to_sdl_rect(ScreenRect::new(1.4, 2.6, 11.5, 5.2));
        assert_eq!(rect, Some(Rect::new(1, 3, 11, 2)));
    }

    #[test]
    fn test_empty_rect_is_skipped() {
        assert_eq!(to_sdl_rect(ScreenRect::new(5.0, 5.0, 5.0, 10.0)), None);
        assert_eq!(to_sdl_rect(ScreenRect::new(5.0, 5.0, 4.0, 10.0)), None);
    }

    #[test]
    fn test_color_conversion_keeps_alpha() {
        let color = to_sdl_color(Color::rgba(1, 2, 3, 4));
        assert_eq!(color, pixels::Color::RGBA(1, 2, 3, 4));
    }
}

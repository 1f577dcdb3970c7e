use super::Control;
use crate::surface::{HorizontalAlign, Paint, Surface, VerticalAlign};

/// A label followed by a live value, e.g. `Score: 120`.
///
/// The value is never stored: `value` is called on every draw.
pub struct ReadOnlyDisplay {
    x: f32,
    y: f32,
    label: String,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
    paint: Paint,
    value: Box<dyn Fn() -> String>,
}

impl ReadOnlyDisplay {
    /// `x`/`y` is the anchor in pixels; the alignments apply to the label and
    /// value taken together.
    pub fn new<F>(
        x: f32,
        y: f32,
        label: impl Into<String>,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
        paint: Paint,
        value: F,
    ) -> Self
    where
        F: Fn() -> String + 'static,
    {
        ReadOnlyDisplay {
            x,
            y,
            label: label.into(),
            horizontal,
            vertical,
            paint,
            value: Box::new(value),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value, as it would be drawn now.
    pub fn text(&self) -> String {
        (self.value)()
    }
}

impl Control for ReadOnlyDisplay {
    fn draw(&self, surface: &mut dyn Surface) {
        let text = self.text();
        let label_width = surface.measure_text(&self.label, &self.paint);
        let text_width = surface.measure_text(&text, &self.paint);
        let left = self.horizontal.left_edge(self.x, label_width + text_width);

        surface.draw_text(
            &self.label,
            left,
            self.y,
            HorizontalAlign::Right,
            self.vertical,
            &self.paint,
        );
        surface.draw_text(
            &text,
            left + label_width,
            self.y,
            HorizontalAlign::Right,
            self.vertical,
            &self.paint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, DrawCall, RecordingSurface};
    use std::cell::Cell;
    use std::rc::Rc;

    fn text_positions(surface: &RecordingSurface) -> Vec<(String, f32)> {
        surface
            .calls()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, x, .. } => Some((text.clone(), *x)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_value_is_queried_on_every_draw() {
        let gold = Rc::new(Cell::new(5));
        let source = Rc::clone(&gold);
        let display = ReadOnlyDisplay::new(
            0.0,
            0.0,
            "Gold ",
            HorizontalAlign::Right,
            VerticalAlign::Center,
            Paint::default(),
            move || source.get().to_string(),
        );

        let mut surface = RecordingSurface::new(100, 100);
        display.draw(&mut surface);
        gold.set(6);
        display.draw(&mut surface);
        assert_eq!(surface.texts(), vec!["Gold ", "5", "Gold ", "6"]);
    }

    #[test]
    fn test_value_follows_label() {
        // 10px text: 6px per character on the recording surface
        let display = ReadOnlyDisplay::new(
            20.0,
            8.0,
            "HP ",
            HorizontalAlign::Right,
            VerticalAlign::Center,
            Paint::new(Color::WHITE, 10.0),
            || "12".to_string(),
        );
        let mut surface = RecordingSurface::new(100, 100);
        display.draw(&mut surface);
        assert_eq!(
            text_positions(&surface),
            vec![("HP ".to_string(), 20.0), ("12".to_string(), 38.0)]
        );
    }

    #[test]
    fn test_centered_display_centers_label_and_value_together() {
        let display = ReadOnlyDisplay::new(
            50.0,
            8.0,
            "HP ",
            HorizontalAlign::Center,
            VerticalAlign::Center,
            Paint::new(Color::WHITE, 10.0),
            || "12".to_string(),
        );
        let mut surface = RecordingSurface::new(100, 100);
        display.draw(&mut surface);
        // 5 characters = 30px wide, so it starts 15px left of the anchor
        assert_eq!(
            text_positions(&surface),
            vec![("HP ".to_string(), 35.0), ("12".to_string(), 53.0)]
        );
    }

    #[test]
    fn test_display_has_no_hit_bounds() {
        let display = ReadOnlyDisplay::new(
            0.0,
            0.0,
            "",
            HorizontalAlign::Right,
            VerticalAlign::Center,
            Paint::default(),
            String::new,
        );
        assert!(display.bounds().is_none());
        assert_eq!(display.text(), "");
    }
}

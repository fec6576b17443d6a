// ── UI types & pure helpers ──────────────────────────────────────────────────

use crate::engine::Color;
use crate::renderer::pipeline::{QuadVertex, push_quad};
use crate::renderer::text::{Font, Vec2, generate_text_mesh, measure_text};

/// Greedy word wrap: words are split on whitespace and packed into lines for
/// which `measure(line) <= max_width`. A word that is wider than `max_width`
/// on its own is placed alone on its line, never split mid-word.
pub fn word_wrap(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() { lines.push(current); }
    lines
}

/// Returns `true` if pixel point `(px, py)` falls inside the rectangle
/// defined by origin `(rx, ry)` and size `(rw, rh)` using half-open intervals.
pub fn rect_contains(rx: f32, ry: f32, rw: f32, rh: f32, px: f32, py: f32) -> bool {
    px >= rx && px < rx + rw && py >= ry && py < ry + rh
}

// ── TextLayer ─────────────────────────────────────────────────────────────────

/// Holds the (optional) bitmap font. When no font could be loaded every text
/// call is a no-op, so a missing asset degrades to a textless game.
#[derive(Default)]
pub struct TextLayer {
    pub font: Option<Font>,
}

impl TextLayer {
    pub fn new(font: Option<Font>) -> Self {
        Self { font }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }
}

// ── Label ──────────────────────────────────────────────────────────────────────

/// Text whose glyph mesh is cached and only rebuilt when the string changes.
///
/// Used for text that stays the same for many frames (the area title).
pub struct Label {
    text: String,
    pub position: Vec2,
    pub color: [f32; 4],
    pub font_size: f32,
    vertices: Vec<QuadVertex>,
    dirty: bool,
}

impl Label {
    pub fn new(position: Vec2, font_size: f32, color: [f32; 4]) -> Self {
        Self {
            text: String::new(),
            position,
            color,
            font_size,
            vertices: Vec::new(),
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update the displayed string. The mesh is rebuilt on the next `draw`.
    /// If `text` is identical to the current string, nothing changes.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_owned();
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append this label's geometry to `ui`.
    pub fn draw(&mut self, ui: &mut UI) {
        if self.dirty {
            self.vertices = match &ui.text.font {
                Some(font) => generate_text_mesh(&self.text, font, self.position, self.font_size, self.color),
                None => Vec::new(),
            };
            self.dirty = false;
        }
        ui.vertices.extend_from_slice(&self.vertices);
    }
}

// ── UI ────────────────────────────────────────────────────────────────────────

/// Immediate-mode draw list in logical pixels plus mouse state.
///
/// Every `ui_*` call appends quads to `vertices`; submission order is paint
/// order. No GPU state, so scenes can be drawn and inspected in tests.
pub struct UI {
    pub vertices: Vec<QuadVertex>,
    /// Cursor position in logical (800×600) coordinates.
    pub mouse_pos: [f32; 2],
    /// True for exactly the frame in which the left mouse button was pressed.
    pub mouse_clicked: bool,
    pub text: TextLayer,
}

impl UI {
    pub fn new(font: Option<Font>) -> Self {
        Self {
            vertices: Vec::new(),
            mouse_pos: [0.0, 0.0],
            mouse_clicked: false,
            text: TextLayer::new(font),
        }
    }

    /// Clear accumulated geometry. Called once per frame before drawing.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Returns `true` if the cursor is inside the given pixel rectangle.
    pub fn is_mouse_over(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        rect_contains(x, y, w, h, self.mouse_pos[0], self.mouse_pos[1])
    }

    /// Returns `true` if the left mouse button was clicked inside the given
    /// pixel rectangle this frame.
    pub fn was_clicked(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        self.mouse_clicked && self.is_mouse_over(x, y, w, h)
    }

    /// Solid rectangle. Fully transparent colours add no geometry.
    pub fn ui_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if color.0[3] <= 0.0 || w <= 0.0 || h <= 0.0 { return; }
        push_quad(&mut self.vertices, [x, y, w, h], [0.0, 0.0], [0.0, 0.0], color.0, 0.0);
    }

    /// Rectangle outline `thickness` pixels wide, drawn inside the bounds.
    pub fn ui_outline(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
        let t = thickness.min(w / 2.0).min(h / 2.0);
        self.ui_rect(x, y, w, t, color);
        self.ui_rect(x, y + h - t, w, t, color);
        self.ui_rect(x, y + t, t, h - 2.0 * t, color);
        self.ui_rect(x + w - t, y + t, t, h - 2.0 * t, color);
    }

    /// One block of text with its top-left at `(x, y)`; `size` is the line height.
    pub fn ui_text(&mut self, x: f32, y: f32, text: &str, color: Color, size: f32) {
        let Some(font) = &self.text.font else { return };
        let mesh = generate_text_mesh(text, font, [x, y], size, color.0);
        self.vertices.extend(mesh);
    }

    /// Text horizontally centred on `cx`.
    pub fn ui_text_centered(&mut self, cx: f32, y: f32, text: &str, color: Color, size: f32) {
        let w = self.text_width(text, size);
        self.ui_text(cx - w / 2.0, y, text, color, size);
    }

    /// Width of the widest line of `text`; 0 without a font.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.text.font.as_ref().map_or(0.0, |f| measure_text(text, f, size))
    }

    /// Word-wrapped text inside a `max_w × max_h` box. Rows that would spill
    /// past `max_h` are dropped.
    pub fn ui_text_wrapped(&mut self, x: f32, y: f32, max_w: f32, max_h: f32,
                           text: &str, color: Color, size: f32) {
        let Some(font) = &self.text.font else { return };
        let lines = word_wrap(text, max_w, |line| measure_text(line, font, size));
        let max_rows = (max_h / size).floor() as usize;
        for (row, line) in lines.into_iter().enumerate().take(max_rows) {
            self.ui_text(x, y + row as f32 * size, &line, color, size);
        }
    }

    /// Clickable button: filled box, outline, centred caption. `hovered`
    /// brightens the outline. Returns `true` when clicked this frame.
    pub fn ui_button(&mut self, x: f32, y: f32, w: f32, h: f32, caption: &str,
                     fill: Color, accent: Color) -> bool {
        let hovered = self.is_mouse_over(x, y, w, h);
        self.ui_rect(x, y, w, h, fill);
        let outline = if hovered { accent } else { accent.with_alpha(0.5) };
        self.ui_outline(x, y, w, h, 2.0, outline);
        let size = (h * 0.5).round();
        self.ui_text_centered(x + w / 2.0, y + (h - size) / 2.0, caption, Color::WHITE, size);
        self.was_clicked(x, y, w, h)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::text::Glyph;
    use std::collections::HashMap;

    fn make_font() -> Font {
        let mut glyphs = HashMap::new();
        // Simple 8×16 glyph for 'A'
        glyphs.insert('A', Glyph { id: 'A', x: 0, y: 0, width: 8, height: 16,
                                   x_offset: 0, y_offset: 0, x_advance: 9 });
        Font { glyphs, line_height: 16, texture_width: 256, texture_height: 256 }
    }

    #[test]
    fn label_starts_clean() {
        let label = Label::new([0.0, 0.0], 16.0, [1.0; 4]);
        assert!(!label.is_dirty());
        assert!(label.text().is_empty());
    }

    #[test]
    fn set_same_text_stays_clean() {
        let mut ui = UI::new(Some(make_font()));
        let mut label = Label::new([0.0, 0.0], 16.0, [1.0; 4]);
        label.set_text("A");
        label.draw(&mut ui);
        label.set_text("A");
        assert!(!label.is_dirty(), "identical set_text must not re-dirty");
    }

    #[test]
    fn label_draw_appends_cached_mesh_each_frame() {
        let mut ui = UI::new(Some(make_font()));
        let mut label = Label::new([0.0, 0.0], 16.0, [1.0; 4]);
        label.set_text("A");
        label.draw(&mut ui);
        label.draw(&mut ui);
        assert_eq!(ui.vertices.len(), 12);
    }

    #[test]
    fn text_without_font_adds_nothing() {
        let mut ui = UI::new(None);
        ui.ui_text(0.0, 0.0, "AAA", Color::WHITE, 16.0);
        ui.ui_text_wrapped(0.0, 0.0, 100.0, 100.0, "A A A", Color::WHITE, 16.0);
        assert!(ui.vertices.is_empty());
        assert_eq!(ui.text_width("AAA", 16.0), 0.0);
    }

    #[test]
    fn transparent_rect_is_skipped() {
        let mut ui = UI::new(None);
        ui.ui_rect(0.0, 0.0, 10.0, 10.0, Color::TRANSPARENT);
        assert!(ui.vertices.is_empty());
        ui.ui_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(ui.vertices.len(), 6);
    }

    #[test]
    fn outline_is_four_strips() {
        let mut ui = UI::new(None);
        ui.ui_outline(0.0, 0.0, 100.0, 50.0, 2.0, Color::WHITE);
        assert_eq!(ui.vertices.len(), 24);
    }

    #[test]
    fn wrapped_text_drops_rows_past_max_height() {
        let mut ui = UI::new(Some(make_font()));
        // 'A' advances 9px and the space has no glyph: "A A" = 18px fits in 20,
        // "A A A" = 27px does not, so the text wraps to two rows.
        ui.ui_text_wrapped(0.0, 0.0, 20.0, 16.0, "A A A", Color::WHITE, 16.0);
        // Only the first row ("A A", two glyphs) fits in 16px of height.
        assert_eq!(ui.vertices.len(), 12);
    }

    #[test]
    fn button_reports_click_inside_only() {
        let mut ui = UI::new(None);
        ui.mouse_pos = [50.0, 20.0];
        ui.mouse_clicked = true;
        assert!(ui.ui_button(0.0, 0.0, 100.0, 40.0, "PLAY", Color::DARK_GRAY, Color::YELLOW));
        assert!(!ui.ui_button(200.0, 0.0, 100.0, 40.0, "QUIT", Color::DARK_GRAY, Color::YELLOW));
    }
}

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::pipeline::{QuadVertex, push_quad};
use crate::error::AssetError;

/// Screen-space 2D position `[x, y]` in pixels.
pub type Vec2 = [f32; 2];

// ── generate_text_mesh ────────────────────────────────────────────────────────

/// Convert `text` into glyph quads (6 vertices each) tinted with `color`.
///
/// - `start_pos`: top-left origin of the text block in logical pixels.
/// - `font_size`: desired line height; glyphs scale by `font_size / line_height`.
/// - `'\n'` resets X and advances one scaled line; it produces no geometry.
/// - Characters absent from `font.glyphs` are skipped; blank glyphs only advance.
/// - Returns an empty buffer when `font.line_height` is zero.
pub fn generate_text_mesh(
    text: &str,
    font: &Font,
    start_pos: Vec2,
    font_size: f32,
    color: [f32; 4],
) -> Vec<QuadVertex> {
    let mut vertices = Vec::new();
    if font.line_height == 0 {
        return vertices;
    }

    let scale = font_size / font.line_height as f32;
    let tw = font.texture_width.max(1) as f32;
    let th = font.texture_height.max(1) as f32;

    let mut current_x = start_pos[0];
    let mut current_y = start_pos[1];

    for ch in text.chars() {
        if ch == '\n' {
            current_x = start_pos[0];
            current_y += font.line_height as f32 * scale;
            continue;
        }

        let Some(glyph) = font.glyphs.get(&ch) else {
            continue;
        };

        // Blank glyphs (space) only advance the cursor.
        if glyph.width > 0 && glyph.height > 0 {
            let quad = [
                current_x + glyph.x_offset as f32 * scale,
                current_y + glyph.y_offset as f32 * scale,
                glyph.width as f32 * scale,
                glyph.height as f32 * scale,
            ];
            let uv_min = [glyph.x as f32 / tw, glyph.y as f32 / th];
            let uv_max = [(glyph.x + glyph.width) as f32 / tw, (glyph.y + glyph.height) as f32 / th];
            push_quad(&mut vertices, quad, uv_min, uv_max, color, 1.0);
        }

        current_x += glyph.x_advance as f32 * scale;
    }

    vertices
}

/// Width in pixels of the widest line of `text` at `font_size`.
pub fn measure_text(text: &str, font: &Font, font_size: f32) -> f32 {
    if font.line_height == 0 {
        return 0.0;
    }
    let scale = font_size / font.line_height as f32;
    text.split('\n')
        .map(|line| {
            line.chars()
                .filter_map(|ch| font.glyphs.get(&ch))
                .map(|g| g.x_advance as f32 * scale)
                .sum::<f32>()
        })
        .fold(0.0, f32::max)
}

// ── Glyph ────────────────────────────────────────────────────────────────────

/// Metrics for a single character in the bitmap font atlas.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub id: char,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: u32,
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// A bitmap font loaded from a JSON descriptor.
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
    /// Vertical distance between successive baselines in pixels.
    pub line_height: u32,
    pub texture_width: u32,
    pub texture_height: u32,
}

impl Font {
    /// Deserialise a `Font` from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawFont = serde_json::from_str(json)?;

        let glyphs = raw
            .glyphs
            .into_iter()
            .filter_map(|g| {
                // Skip any code-point that isn't a valid Unicode scalar value.
                char::from_u32(g.id).map(|ch| {
                    (ch, Glyph {
                        id: ch,
                        x: g.x,
                        y: g.y,
                        width: g.width,
                        height: g.height,
                        x_offset: g.x_offset,
                        y_offset: g.y_offset,
                        x_advance: g.x_advance,
                    })
                })
            })
            .collect();

        Ok(Self {
            glyphs,
            line_height: raw.line_height,
            texture_width: raw.texture_width,
            texture_height: raw.texture_height,
        })
    }
}

/// The font descriptor together with its decoded atlas pixels.
pub struct FontAsset {
    pub font: Font,
    pub atlas: image::RgbaImage,
}

impl FontAsset {
    pub const ATLAS_FILE: &'static str = "atlas.png";
    pub const GLYPHS_FILE: &'static str = "glyphs.json";

    /// Load `atlas.png` and `glyphs.json` from `dir`.
    ///
    /// The atlas's real dimensions override whatever the JSON claims, so UVs
    /// always match the uploaded texture.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let atlas_path = dir.join(Self::ATLAS_FILE);
        let glyphs_path = dir.join(Self::GLYPHS_FILE);

        let json = std::fs::read_to_string(&glyphs_path)
            .map_err(|e| AssetError::Io(glyphs_path.clone(), e))?;
        let mut font = Font::from_json(&json)
            .map_err(|e| AssetError::GlyphMap(glyphs_path.clone(), e))?;

        let atlas = image::open(&atlas_path)
            .map_err(|e| AssetError::Image(atlas_path.clone(), e))?
            .to_rgba8();
        font.texture_width = atlas.width();
        font.texture_height = atlas.height();

        Ok(Self { font, atlas })
    }
}

// ── Raw (JSON-facing) types ───────────────────────────────────────────────────
//
// Character IDs are stored as u32 in JSON (Unicode code points); we convert
// them to `char` when building the public `Font`.

#[derive(Deserialize)]
struct RawGlyph {
    id: u32,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    x_offset: i32,
    y_offset: i32,
    x_advance: u32,
}

#[derive(Deserialize)]
struct RawFont {
    line_height: u32,
    texture_width: u32,
    texture_height: u32,
    glyphs: Vec<RawGlyph>,
}

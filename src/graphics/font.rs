//! Glyph rasterization.

use crate::glyph_cache::{GlyphCacheKey, GlyphEntry};
use ab_glyph::{Font as _, FontArc, Glyph, GlyphId, PxScale, ScaleFont as _};

use super::core::Painter;

impl Painter<'_, '_> {
    /// Rasterizes a glyph at the origin, or returns the cached copy.
    pub(super) fn render_single_glyph(
        &mut self,
        font_id: u32,
        font: &FontArc,
        scale: PxScale,
        glyph_id: GlyphId,
    ) -> GlyphEntry {
        let key = GlyphCacheKey {
            font_id,
            font_size_bits: scale.y.to_bits(),
            glyph_id: glyph_id.0 as u32,
        };
        if let Some(entry) = self.glyph_cache.get(&key) {
            return entry.clone();
        }

        let scaled = font.as_scaled(scale);
        let glyph = Glyph {
            id: glyph_id,
            scale,
            position: ab_glyph::point(0.0, 0.0),
        };

        // Blank glyphs such as spaces have no outline.
        let entry = match scaled.outline_glyph(glyph) {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                let width = bounds.width().ceil().max(1.0) as u32;
                let height = bounds.height().ceil().max(1.0) as u32;
                let mut coverage = vec![0.0f32; (width * height) as usize];
                outlined.draw(|x, y, v| {
                    if x < width && y < height {
                        coverage[(y * width + x) as usize] = v;
                    }
                });
                GlyphEntry {
                    left: bounds.min.x as i32,
                    top: bounds.min.y as i32,
                    width,
                    coverage,
                }
            }
            None => GlyphEntry::default(),
        };

        self.glyph_cache.insert(key, entry.clone());
        entry
    }
}

use std::collections::HashMap;

use ab_glyph::{Font as _, FontArc, PxScale};

use crate::pt::Pt;

/// DejaVu Sans Bold, used for the wordmark.
pub const DEJAVU_SANS_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");
/// DejaVu Sans Oblique, used for math-italic symbols.
pub const DEJAVU_SANS_OBLIQUE: &[u8] = include_bytes!("../assets/DejaVuSans-Oblique.ttf");

/// Registered fonts, addressed by the id handed out at registration.
#[derive(Default, Clone)]
pub struct FontBook {
    fonts: HashMap<u32, FontArc>,
    next_font_id: u32,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("len", &self.fonts.len())
            .finish()
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_static_font(&mut self, font_data: &'static [u8]) -> anyhow::Result<u32> {
        let font = FontArc::try_from_slice(font_data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
        Ok(self.insert(font))
    }

    fn insert(&mut self, font: FontArc) -> u32 {
        let font_id = self.next_font_id;
        self.next_font_id = self.next_font_id.saturating_add(1);
        self.fonts.insert(font_id, font);
        font_id
    }

    pub fn get(&self, font_id: u32) -> anyhow::Result<&FontArc> {
        self.fonts
            .get(&font_id)
            .ok_or_else(|| anyhow::anyhow!("Font ID {} not found", font_id))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Pixel scale that gives `font` an em of `size` at `dpi`.
///
/// `ab_glyph` scales by the ascent-to-descent height rather than the em, so the
/// em size is corrected by `height / units_per_em`.
pub fn px_scale(font: &FontArc, size: Pt, dpi: f32) -> PxScale {
    let px_per_em = size.to_px(dpi).max(1.0);
    let ratio = font
        .units_per_em()
        .map(|upem| font.height_unscaled() / upem)
        .unwrap_or(1.0);
    PxScale::from(px_per_em * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::{Font as _, ScaleFont as _};

    #[test]
    fn test_register_embedded_fonts() {
        let mut book = FontBook::new();
        let bold = book.register_static_font(DEJAVU_SANS_BOLD).unwrap();
        let oblique = book.register_static_font(DEJAVU_SANS_OBLIQUE).unwrap();
        assert_ne!(bold, oblique);
        assert_eq!(book.len(), 2);
        assert!(book.get(bold).is_ok());
        assert!(book.get(99).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        let mut book = FontBook::new();
        assert!(book.register_static_font(&[0u8; 16]).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_px_scale_matches_em() {
        let mut book = FontBook::new();
        let id = book.register_static_font(DEJAVU_SANS_BOLD).unwrap();
        let font = book.get(id).unwrap();
        let scale = px_scale(font, Pt::new(72.0), 100.0);
        let scaled = font.as_scaled(scale);
        // DejaVu Sans Bold 'N' advances 1714 of 2048 units.
        let advance = scaled.h_advance(scaled.glyph_id('N'));
        assert!((advance - 83.7).abs() < 0.5, "advance {advance}");
        assert!(scaled.glyph_id('\u{3bd}').0 != 0);
    }
}

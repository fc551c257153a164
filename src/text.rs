use crate::color::Color;
use crate::font::{FontBook, px_scale};
use crate::{Context, DrawOption};
use ab_glyph::{Font as _, FontArc, GlyphId, PxScale, ScaleFont as _};
use std::fmt;

/// Horizontal anchor of a text item relative to its ink box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
}

/// Vertical anchor of a text item.
///
/// `Center` centers the font's line box (ascent to descent) so that every
/// letter of a word shares one baseline; `Bottom` puts the lowest ink on the
/// anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Center,
    Bottom,
}

/// Text handle for drawing a single line onto the logo.
///
/// The anchor position comes from the [`DrawOption`] passed to [`Text::draw`]
/// and is given in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) content: String,
    pub(crate) font_size: crate::Pt,
    pub(crate) color: Color,
    pub(crate) font_id: u32,
    pub(crate) stroke_width: crate::Pt,
    pub(crate) stroke_color: Color,
    pub(crate) h_align: HAlign,
    pub(crate) v_align: VAlign,
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Pixel measurements of a laid-out line, relative to the pen origin on the
/// baseline (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Ink width.
    pub width: f32,
    /// Ink height.
    pub height: f32,
    /// Left edge of the ink.
    pub ink_left: f32,
    /// Top edge of the ink; negative above the baseline.
    pub ink_top: f32,
    pub ascent: f32,
    pub descent: f32,
}

/// Glyph ids with their pen positions along the baseline.
#[derive(Debug, Clone)]
pub(crate) struct TextLayout {
    pub scale: PxScale,
    pub glyphs: Vec<(GlyphId, f32)>,
    pub metrics: TextMetrics,
}

impl TextLayout {
    /// Pen origin, in pixels, that puts the text's anchor point on `anchor`.
    pub(crate) fn origin_for(&self, anchor: [f32; 2], h: HAlign, v: VAlign) -> [f32; 2] {
        let m = &self.metrics;
        let x = match h {
            HAlign::Left => anchor[0] - m.ink_left,
            HAlign::Center => anchor[0] - (m.ink_left + m.width / 2.0),
        };
        let y = match v {
            VAlign::Center => anchor[1] + (m.ascent + m.descent) / 2.0,
            VAlign::Bottom => anchor[1] - (m.ink_top + m.height),
        };
        [x, y]
    }
}

impl Text {
    /// Creates a new text instance with the given content.
    ///
    /// # Example
    /// ```
    /// # use nuosc_logo::{FontBook, Text, font::DEJAVU_SANS_BOLD};
    /// let mut fonts = FontBook::new();
    /// let font_id = fonts.register_static_font(DEJAVU_SANS_BOLD).unwrap();
    /// let text = Text::new("N", font_id).with_font_size(nuosc_logo::Pt::new(120.0));
    /// assert_eq!(text.to_string(), "N");
    /// ```
    pub fn new(content: impl Into<String>, font_id: u32) -> Self {
        Self {
            content: content.into(),
            font_size: crate::Pt(24.0),
            color: Color::BLACK,
            font_id,
            stroke_width: crate::Pt(0.0),
            stroke_color: Color::WHITE,
            h_align: HAlign::Left,
            v_align: VAlign::Center,
        }
    }

    pub fn with_font_size(mut self, font_size: crate::Pt) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: crate::Pt) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_stroke_color(mut self, stroke_color: Color) -> Self {
        self.stroke_color = stroke_color;
        self
    }

    pub fn with_align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }

    /// Returns the ink metrics of this text in pixels at `dpi`.
    pub fn measure(&self, fonts: &FontBook, dpi: f32) -> anyhow::Result<TextMetrics> {
        let font = fonts.get(self.font_id)?;
        Ok(self.layout(font, dpi).metrics)
    }

    pub(crate) fn layout(&self, font: &FontArc, dpi: f32) -> TextLayout {
        let scale = px_scale(font, self.font_size, dpi);
        let scaled = font.as_scaled(scale);

        let mut glyphs = Vec::with_capacity(self.content.len());
        let mut caret = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        let mut ink: Option<[f32; 4]> = None;

        for ch in self.content.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            prev = Some(id);

            if let Some(outlined) = scaled.outline_glyph(ab_glyph::Glyph {
                id,
                scale,
                position: ab_glyph::point(caret, 0.0),
            }) {
                let b = outlined.px_bounds();
                ink = Some(match ink {
                    None => [b.min.x, b.min.y, b.max.x, b.max.y],
                    Some(i) => [
                        i[0].min(b.min.x),
                        i[1].min(b.min.y),
                        i[2].max(b.max.x),
                        i[3].max(b.max.y),
                    ],
                });
            }
            glyphs.push((id, caret));
            caret += scaled.h_advance(id);
        }

        let [left, top, right, bottom] = ink.unwrap_or([0.0, 0.0, 0.0, 0.0]);
        TextLayout {
            scale,
            glyphs,
            metrics: TextMetrics {
                width: right - left,
                height: bottom - top,
                ink_left: left,
                ink_top: top,
                ascent: scaled.ascent(),
                descent: scaled.descent(),
            },
        }
    }

    /// Queues this text on the context; `options` carries its anchor.
    pub fn draw(&self, context: &mut Context, options: DrawOption) {
        context.push(crate::drawable::DrawCommand::Text(
            Box::new(self.clone()),
            options,
        ));
    }
}

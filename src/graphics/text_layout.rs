//! Text layout and rasterization.

use ab_glyph::{Font as _, FontArc, GlyphId, OutlineCurve, Point, PxScale, ScaleFont as _};

use crate::DrawOption;
use crate::Text;
use crate::font::FontBook;

use super::core::Painter;

/// Line segments per quadratic or cubic curve when flattening outlines.
const CURVE_STEPS: usize = 8;

impl Painter<'_, '_> {
    /// Paints `text` anchored at `opts.position()`.
    ///
    /// An outlined text strokes every glyph contour in the stroke colour
    /// first, then the glyph coverage is blended on top in the fill colour.
    pub(crate) fn draw_text(
        &mut self,
        text: &Text,
        opts: &DrawOption,
        fonts: &FontBook,
    ) -> anyhow::Result<()> {
        let font = fonts.get(text.font_id)?;
        let layout = text.layout(font, self.viewport.dpi());
        let m = layout.metrics;
        if m.width <= 0.0 || m.height <= 0.0 {
            return Ok(());
        }

        let anchor = self.viewport.data_to_px(opts.position());
        let origin = layout.origin_for(anchor, text.h_align, text.v_align);

        let stroke_px = self.viewport.pt_to_px(text.stroke_width);
        if stroke_px > 0.0 {
            let color = text.stroke_color.to_backend(opts.opacity());
            for &(glyph_id, caret_x) in &layout.glyphs {
                let pen = [origin[0] + caret_x, origin[1]];
                for contour in glyph_contours(font, layout.scale, glyph_id, pen) {
                    self.stroke_path(&contour, stroke_px, color)?;
                }
            }
        }

        let fill = text.color.to_backend(opts.opacity());
        for &(glyph_id, caret_x) in &layout.glyphs {
            let entry = self.render_single_glyph(text.font_id, font, layout.scale, glyph_id);
            let pen = [
                (origin[0] + caret_x).round() as i32,
                origin[1].round() as i32,
            ];
            self.blend_glyph(&entry, pen, fill)?;
        }
        Ok(())
    }
}

/// Closed outline contours of one glyph in figure pixels, with the pen on the
/// baseline at `pen`.
fn glyph_contours(
    font: &FontArc,
    scale: PxScale,
    glyph_id: GlyphId,
    pen: [f32; 2],
) -> Vec<Vec<[f32; 2]>> {
    let Some(outline) = font.outline(glyph_id) else {
        return Vec::new();
    };
    let scaled = font.as_scaled(scale);
    let (sx, sy) = (scaled.h_scale_factor(), scaled.v_scale_factor());
    // Outlines are in font units with y pointing up.
    let to_px = |p: Point| [pen[0] + p.x * sx, pen[1] - p.y * sy];

    let mut contours = Vec::new();
    let mut current: Vec<[f32; 2]> = Vec::new();
    let mut last: Option<Point> = None;
    for curve in &outline.curves {
        let (start, end, steps): (Point, Point, Vec<Point>) = match *curve {
            OutlineCurve::Line(a, b) => (a, b, vec![b]),
            OutlineCurve::Quad(a, b, c) => (a, c, flatten(|t| quad(a, b, c, t))),
            OutlineCurve::Cubic(a, b, c, d) => (a, d, flatten(|t| cubic(a, b, c, d, t))),
        };
        if last != Some(start) {
            if current.len() > 1 {
                contours.push(std::mem::take(&mut current));
            }
            current.clear();
            current.push(to_px(start));
        }
        current.extend(steps.into_iter().map(to_px));
        last = Some(end);
    }
    if current.len() > 1 {
        contours.push(current);
    }
    contours
}

fn flatten(at: impl Fn(f32) -> Point) -> Vec<Point> {
    (1..=CURVE_STEPS)
        .map(|i| at(i as f32 / CURVE_STEPS as f32))
        .collect()
}

fn quad(a: Point, b: Point, c: Point, t: f32) -> Point {
    let u = 1.0 - t;
    ab_glyph::point(
        u * u * a.x + 2.0 * u * t * b.x + t * t * c.x,
        u * u * a.y + 2.0 * u * t * b.y + t * t * c.y,
    )
}

fn cubic(a: Point, b: Point, c: Point, d: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let (w0, w1, w2, w3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    ab_glyph::point(
        w0 * a.x + w1 * b.x + w2 * c.x + w3 * d.x,
        w0 * a.y + w1 * b.y + w2 * c.y + w3 * d.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::font::{DEJAVU_SANS_BOLD, px_scale};
    use crate::graphics::Graphics;
    use crate::pt::Pt;
    use crate::text::{HAlign, VAlign};
    use crate::viewport::Viewport;

    fn setup() -> (Graphics, FontBook, u32) {
        let mut fonts = FontBook::new();
        let id = fonts.register_static_font(DEJAVU_SANS_BOLD).unwrap();
        let g = Graphics::with_viewport(Viewport::new(400.0, 400.0, 100.0), Color::WHITE);
        (g, fonts, id)
    }

    fn draw(g: &mut Graphics, text: &Text, at: [f64; 2], fonts: &FontBook) {
        g.paint(|p| p.draw_text(text, &DrawOption::new(at, 1.0), fonts))
            .unwrap();
    }

    #[test]
    fn test_text_is_inked_around_anchor() {
        let (mut g, fonts, id) = setup();
        let text = Text::new("Nu", id)
            .with_font_size(Pt::new(40.0))
            .with_color(Color::RED)
            .with_align(HAlign::Center, VAlign::Center);
        draw(&mut g, &text, [0.5, 0.5], &fonts);

        let anchor = g.viewport().data_to_px([0.5, 0.5]);
        let ink = g.ink_bounds().unwrap();
        let center_x = (ink[0] + ink[2]) as f32 / 2.0;
        assert!((center_x - anchor[0]).abs() < 2.0, "{ink:?} vs {anchor:?}");
        assert!(ink[1] as f32 <= anchor[1] && ink[3] as f32 >= anchor[1]);
        assert_eq!(g.glyph_cache.len(), 2);
    }

    #[test]
    fn test_outline_surrounds_fill() {
        let (mut g, fonts, id) = setup();
        let plain = Text::new("l", id).with_font_size(Pt::new(40.0)).with_color(Color::BLACK);
        let outlined = plain
            .clone()
            .with_stroke_width(Pt::new(8.0))
            .with_stroke_color(Color::BLUE);

        draw(&mut g, &plain, [0.25, 0.5], &fonts);
        let plain_ink = g.ink_bounds().unwrap();

        let (mut g2, _, _) = setup();
        draw(&mut g2, &outlined, [0.25, 0.5], &fonts);
        let outlined_ink = g2.ink_bounds().unwrap();

        assert!(outlined_ink[0] < plain_ink[0]);
        assert!(outlined_ink[2] > plain_ink[2]);
        // a stroke of 8 pt reaches about 5.5 px beyond the stem
        let y = (plain_ink[1] + plain_ink[3]) / 2;
        assert_eq!(g2.pixel(plain_ink[0] - 2, y), Some([0, 0, 255]));
        // the fill is painted over the inner half of the stroke
        let x = (plain_ink[0] + plain_ink[2]) / 2;
        assert_eq!(g2.pixel(x, y), Some([0, 0, 0]));
    }

    #[test]
    fn test_contours_follow_the_pen() {
        let (_, fonts, id) = setup();
        let font = fonts.get(id).unwrap();
        let scale = px_scale(font, Pt::new(40.0), 100.0);
        let glyph = font.glyph_id('l');

        let at_origin = glyph_contours(font, scale, glyph, [0.0, 0.0]);
        let moved = glyph_contours(font, scale, glyph, [10.0, 20.0]);
        assert_eq!(at_origin.len(), 1);
        assert_eq!(at_origin[0].len(), moved[0].len());
        for (a, b) in at_origin[0].iter().zip(&moved[0]) {
            assert!((b[0] - a[0] - 10.0).abs() < 1e-3);
            assert!((b[1] - a[1] - 20.0).abs() < 1e-3);
        }
        // above the baseline means negative y
        assert!(at_origin[0].iter().all(|p| p[1] <= 0.5));
        assert!(glyph_contours(font, scale, font.glyph_id(' '), [0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let (mut g, fonts, id) = setup();
        draw(&mut g, &Text::new("", id), [0.0, 0.0], &fonts);
        assert!(g.ink_bounds().is_none());
    }
}

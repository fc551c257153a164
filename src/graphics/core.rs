//! Core Graphics structure and the plotters drawing area it paints through.

use anyhow::anyhow;
use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, Circle, DrawingArea, IntoDrawingArea, PathElement};
use plotters::style::{RGBAColor, ShapeStyle};

use crate::color::Color;
use crate::config::LogoConfig;
use crate::glyph_cache::{GlyphCache, GlyphEntry};
use crate::viewport::Viewport;

/// Bytes per pixel of the RGB canvas.
const PIXEL_SIZE: usize = 3;

pub struct Graphics {
    /// RGB pixels of the figure plus its overscan margin, row-major.
    pub(crate) canvas: Vec<u8>,
    pub(crate) size: (u32, u32),
    pub(crate) viewport: Viewport,
    /// Offset of the figure's top-left corner inside `canvas`.
    pub(crate) margin: [i32; 2],
    /// Inked area in figure pixels, `[x0, y0, x1, y1]`.
    pub(crate) ink: Option<[f32; 4]>,
    pub(crate) glyph_cache: GlyphCache,
}

impl Graphics {
    pub fn new(config: &LogoConfig) -> Self {
        Self::with_viewport(Viewport::from_config(config), config.background)
    }

    /// Raster sized to the viewport's figure with a quarter-figure overscan on
    /// every side, so content placed outside the figure is still captured.
    pub fn with_viewport(viewport: Viewport, background: Color) -> Self {
        let [fw, fh] = viewport.figure_size();
        let margin = [(fw / 4.0).ceil() as i32, (fh / 4.0).ceil() as i32];
        let width = fw.ceil() as u32 + 2 * margin[0] as u32;
        let height = fh.ceil() as u32 + 2 * margin[1] as u32;
        let [r, g, b, _] = background.to_rgba8();
        let canvas = [r, g, b].repeat(width as usize * height as usize);
        Self {
            canvas,
            size: (width, height),
            viewport,
            margin,
            ink: None,
            glyph_cache: GlyphCache::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Inked area in whole figure pixels, `[x0, y0, x1, y1)`.
    pub fn ink_bounds(&self) -> Option<[i32; 4]> {
        self.ink.map(|[x0, y0, x1, y1]| {
            [
                x0.floor() as i32,
                y0.floor() as i32,
                x1.ceil() as i32,
                y1.ceil() as i32,
            ]
        })
    }

    /// Pixel at figure coordinates `(x, y)`, if it lies on the raster.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        let cx = x + self.margin[0];
        let cy = y + self.margin[1];
        let (w, h) = (self.size.0 as i32, self.size.1 as i32);
        if cx < 0 || cy < 0 || cx >= w || cy >= h {
            return None;
        }
        let i = (cy as usize * self.size.0 as usize + cx as usize) * PIXEL_SIZE;
        Some([self.canvas[i], self.canvas[i + 1], self.canvas[i + 2]])
    }

    /// Runs `paint` against a drawing area over the canvas, then flushes it.
    pub(crate) fn paint<R>(
        &mut self,
        paint: impl FnOnce(&mut Painter<'_, '_>) -> anyhow::Result<R>,
    ) -> anyhow::Result<R> {
        let Graphics {
            canvas,
            size,
            viewport,
            margin,
            ink,
            glyph_cache,
        } = self;
        let area = BitMapBackend::with_buffer(canvas.as_mut_slice(), *size).into_drawing_area();
        let result = {
            let mut painter = Painter {
                area: &area,
                viewport: &*viewport,
                margin: *margin,
                ink,
                glyph_cache,
            };
            paint(&mut painter)
        };
        area.present().map_err(|e| anyhow!("failed to flush canvas: {e}"))?;
        result
    }
}

/// Paints figure-pixel geometry onto the canvas and records where ink landed.
pub(crate) struct Painter<'a, 'b> {
    area: &'b DrawingArea<BitMapBackend<'a>, Shift>,
    pub(crate) viewport: &'b Viewport,
    margin: [i32; 2],
    ink: &'b mut Option<[f32; 4]>,
    pub(crate) glyph_cache: &'b mut GlyphCache,
}

impl Painter<'_, '_> {
    fn to_canvas(&self, p: [f32; 2]) -> (i32, i32) {
        (
            p[0].round() as i32 + self.margin[0],
            p[1].round() as i32 + self.margin[1],
        )
    }

    fn mark(&mut self, [x0, y0, x1, y1]: [f32; 4]) {
        *self.ink = Some(match *self.ink {
            None => [x0, y0, x1, y1],
            Some(b) => [b[0].min(x0), b[1].min(y0), b[2].max(x1), b[3].max(y1)],
        });
    }

    /// Fills a circle of `radius` pixels centered on `center`.
    pub(crate) fn fill_disk(
        &mut self,
        center: [f32; 2],
        radius: f32,
        color: RGBAColor,
    ) -> anyhow::Result<()> {
        if color.3 <= 0.0 || radius <= 0.0 {
            return Ok(());
        }
        let style = ShapeStyle {
            color,
            filled: true,
            stroke_width: 0,
        };
        let r = radius.round().max(1.0) as u32;
        self.area
            .draw(&Circle::new(self.to_canvas(center), r, style))
            .map_err(|e| anyhow!("failed to draw disk: {e}"))?;
        self.mark([
            center[0] - radius,
            center[1] - radius,
            center[0] + radius,
            center[1] + radius,
        ]);
        Ok(())
    }

    /// Strokes an open path `width` pixels wide.
    pub(crate) fn stroke_path(
        &mut self,
        points: &[[f32; 2]],
        width: f32,
        color: RGBAColor,
    ) -> anyhow::Result<()> {
        if points.is_empty() || color.3 <= 0.0 {
            return Ok(());
        }
        let style = ShapeStyle {
            color,
            filled: false,
            stroke_width: width.round().max(1.0) as u32,
        };
        let mut path: Vec<(i32, i32)> = points.iter().map(|p| self.to_canvas(*p)).collect();
        path.dedup();
        self.area
            .draw(&PathElement::new(path, style))
            .map_err(|e| anyhow!("failed to draw path: {e}"))?;

        let half = width / 2.0;
        let mut bounds = [f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY];
        for p in points {
            bounds = [
                bounds[0].min(p[0] - half),
                bounds[1].min(p[1] - half),
                bounds[2].max(p[0] + half),
                bounds[3].max(p[1] + half),
            ];
        }
        self.mark(bounds);
        Ok(())
    }

    /// Blends a glyph bitmap whose pen origin sits on `origin`.
    pub(crate) fn blend_glyph(
        &mut self,
        glyph: &GlyphEntry,
        origin: [i32; 2],
        color: RGBAColor,
    ) -> anyhow::Result<()> {
        if color.3 <= 0.0 || glyph.is_blank() {
            return Ok(());
        }
        let x0 = origin[0] + self.margin[0];
        let y0 = origin[1] + self.margin[1];
        for (x, y, coverage) in glyph.iter() {
            let pixel = RGBAColor(color.0, color.1, color.2, color.3 * coverage as f64);
            self.area
                .draw_pixel((x0 + x, y0 + y), &pixel)
                .map_err(|e| anyhow!("failed to draw glyph: {e}"))?;
        }
        let left = (origin[0] + glyph.left) as f32;
        let top = (origin[1] + glyph.top) as f32;
        let rows = glyph.coverage.len() as u32 / glyph.width.max(1);
        self.mark([left, top, left + glyph.width as f32, top + rows as f32]);
        Ok(())
    }
}

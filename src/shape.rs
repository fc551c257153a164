//! Vector shapes queued on a [`Context`].
//!
//! Coordinates are in data space; widths and sizes are in points.

use crate::color::Color;
use crate::drawable::DrawCommand;
use crate::pt::Pt;
use crate::viewport::Viewport;
use crate::{Context, DrawOption};

/// Filled circle without an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Disk {
    pub(crate) center: [f64; 2],
    pub(crate) radius: f64,
    pub(crate) color: Color,
}

impl Disk {
    pub fn new(center: [f64; 2], radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn draw(&self, context: &mut Context, options: DrawOption) {
        context.push(DrawCommand::Disk(self.clone(), options));
    }
}

/// Open polyline stroked with round joins and caps.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub(crate) points: Vec<[f64; 2]>,
    pub(crate) width: Pt,
    pub(crate) color: Color,
}

impl Polyline {
    pub fn new(points: Vec<[f64; 2]>, color: Color) -> Self {
        Self {
            points,
            width: Pt(1.5),
            color,
        }
    }

    pub fn with_width(mut self, width: Pt) -> Self {
        self.width = width;
        self
    }

    pub fn draw(&self, context: &mut Context, options: DrawOption) {
        context.push(DrawCommand::Polyline(self.clone(), options));
    }
}

/// Round scatter markers of equal size.
///
/// Each marker is a face of `area` square points ringed by an edge stroke in
/// the same colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Markers {
    pub(crate) points: Vec<[f64; 2]>,
    /// Face area in square points.
    pub(crate) area: f32,
    pub(crate) edge_width: Pt,
    pub(crate) color: Color,
}

impl Markers {
    pub fn new(points: Vec<[f64; 2]>, area: f32, color: Color) -> Self {
        Self {
            points,
            area,
            edge_width: Pt(1.5),
            color,
        }
    }

    pub fn with_edge_width(mut self, edge_width: Pt) -> Self {
        self.edge_width = edge_width;
        self
    }

    /// Painted diameter: the face plus half the edge stroke on each side.
    pub fn diameter(&self) -> Pt {
        Pt(self.area.max(0.0).sqrt()) + self.edge_width
    }

    pub fn draw(&self, context: &mut Context, options: DrawOption) {
        context.push(DrawCommand::Markers(self.clone(), options));
    }
}

/// Straight arrow with an open `->` head at its end.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub(crate) from: [f64; 2],
    pub(crate) to: [f64; 2],
    pub(crate) width: Pt,
    pub(crate) color: Color,
    pub(crate) head_length: Pt,
    pub(crate) head_width: Pt,
    /// Distance both ends are pulled in by.
    pub(crate) shrink: Pt,
}

impl Arrow {
    pub fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        Self {
            from,
            to,
            width: Pt(1.0),
            color: Color::BLACK,
            head_length: Pt(0.4),
            head_width: Pt(0.2),
            shrink: Pt(2.0),
        }
    }

    pub fn with_width(mut self, width: Pt) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Head proportions, multiplied by `mutation_scale` points.
    pub fn with_head(mut self, length: f32, width: f32, mutation_scale: f32) -> Self {
        self.head_length = Pt(length * mutation_scale);
        self.head_width = Pt(width * mutation_scale);
        self
    }

    pub fn with_shrink(mut self, shrink: Pt) -> Self {
        self.shrink = shrink;
        self
    }

    /// Shaft and head strokes in pixels: `[shaft, head]`.
    pub(crate) fn paths_px(
        &self,
        viewport: &Viewport,
        options: &DrawOption,
    ) -> [Vec<[f32; 2]>; 2] {
        let a = viewport.data_to_px(options.translate(self.from));
        let b = viewport.data_to_px(options.translate(self.to));
        let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            return [vec![a], Vec::new()];
        }
        let dir = [dx / len, dy / len];
        let normal = [-dir[1], dir[0]];

        let shrink = viewport.pt_to_px(self.shrink).min(len / 2.0);
        let start = [a[0] + dir[0] * shrink, a[1] + dir[1] * shrink];
        let tip = [b[0] - dir[0] * shrink, b[1] - dir[1] * shrink];

        let hl = viewport.pt_to_px(self.head_length);
        let hw = viewport.pt_to_px(self.head_width);
        let back = [tip[0] - dir[0] * hl, tip[1] - dir[1] * hl];
        let head = vec![
            [back[0] + normal[0] * hw, back[1] + normal[1] * hw],
            tip,
            [back[0] - normal[0] * hw, back[1] - normal[1] * hw],
        ];
        [vec![start, tip], head]
    }

    pub fn draw(&self, context: &mut Context, options: DrawOption) {
        context.push(DrawCommand::Arrow(self.clone(), options));
    }
}

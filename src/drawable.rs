use crate::Text;
use crate::shape::{Arrow, Disk, Markers, Polyline};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCommand {
    Disk(Disk, DrawOption),
    Polyline(Polyline, DrawOption),
    Markers(Markers, DrawOption),
    Arrow(Arrow, DrawOption),
    Text(Box<Text>, DrawOption),
}

impl DrawCommand {
    pub(crate) fn options(&self) -> &DrawOption {
        match self {
            DrawCommand::Disk(_, o)
            | DrawCommand::Polyline(_, o)
            | DrawCommand::Markers(_, o)
            | DrawCommand::Arrow(_, o)
            | DrawCommand::Text(_, o) => o,
        }
    }
}

/// Unified options for drawing shapes and text.
///
/// Controls placement, paint order and transparency of drawn items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOption {
    /// Position in data coordinates. Text is anchored here; shapes are
    /// translated by it.
    position: [f64; 2],
    /// Paint order. Lower values are painted first; ties keep insertion order.
    zorder: f32,
    opacity: f32,
}

impl Default for DrawOption {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            zorder: 1.0,
            opacity: 1.0,
        }
    }
}

impl DrawOption {
    pub fn new(position: [f64; 2], zorder: f32) -> Self {
        Self {
            position,
            zorder,
            opacity: 1.0,
        }
    }

    pub fn position(&self) -> [f64; 2] {
        self.position
    }

    pub fn zorder(&self) -> f32 {
        self.zorder
    }

    pub fn with_zorder(mut self, zorder: f32) -> Self {
        self.zorder = zorder;
        self
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub(crate) fn translate(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] + self.position[0], point[1] + self.position[1]]
    }
}

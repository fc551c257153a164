//! Concentric Earth-layer disks.

use crate::color::Color;
use crate::shape::Disk;
use crate::{Context, DrawOption};

/// Emblem center in data coordinates.
pub const CENTER: [f64; 2] = [0.5, 0.5];

/// Relative size of the emblem inside the unit frame.
pub const SCALE: f64 = 0.9;

/// One shell of the emblem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Diameter relative to the frame before [`SCALE`] is applied.
    pub size: f64,
    pub color: Color,
    pub label: &'static str,
}

impl Layer {
    /// Disk radius in data units.
    pub fn radius(&self) -> f64 {
        self.size * SCALE / 2.0
    }
}

/// Outermost to innermost.
pub const LAYERS: [Layer; 4] = [
    Layer {
        size: 1.0,
        color: Color::rgb8(0x46, 0x82, 0xB4),
        label: "Atmosphere",
    },
    Layer {
        size: 0.95,
        color: Color::rgb8(0x1E, 0x3A, 0x8A),
        label: "Outer Layer",
    },
    Layer {
        size: 0.7,
        color: Color::rgb8(0xFF, 0xB3, 0x47),
        label: "Mantle",
    },
    Layer {
        size: 0.3,
        color: Color::rgb8(0x80, 0x00, 0x00),
        label: "Core",
    },
];

pub const ATMOSPHERE: usize = 0;
pub const MANTLE: usize = 2;
pub const CORE: usize = 3;

/// Queues the four disks, largest first, all at z-order 1.
pub fn draw_layers(context: &mut Context) {
    for layer in &LAYERS {
        Disk::new(CENTER, layer.radius(), layer.color)
            .draw(context, DrawOption::default().with_zorder(1.0));
        tracing::debug!(layer = layer.label, radius = layer.radius(), "queued earth layer");
    }
}

//! Probability-weighted sine waves confined to the mantle.
//!
//! Three waves share one sample grid. Each wave's amplitude follows its own
//! weight curve, and the three weights form a probability simplex at every
//! sample. Only samples that land inside the mantle disk are drawn.

use std::f64::consts::PI;

use anyhow::bail;

use super::layers::{CENTER, CORE, LAYERS, MANTLE};
use crate::color::Color;
use crate::shape::{Markers, Polyline};
use crate::{Context, DrawOption, Pt};

/// Number of samples along x.
pub const SAMPLE_COUNT: usize = 1000;

/// Every `MARKER_STRIDE`-th visible sample gets a marker.
pub const MARKER_STRIDE: usize = 50;

/// Marker area in square points.
pub const MARKER_AREA: f32 = 10.0;
pub const MARKER_OPACITY: f32 = 0.6;
pub const MARKER_ZORDER: f32 = 6.0;

const X_OFFSET_BASE: f64 = 0.15;
const JITTER_AMPLITUDE: f64 = 0.055;
const JITTER_FREQUENCY: f64 = 50.0;

/// Parameters of one decorative wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub frequency: f64,
    pub base_amplitude: f64,
    pub color: Color,
    /// Line width before weight scaling.
    pub line_width: Pt,
    /// Scale of the shared jitter term.
    pub offset: f64,
    pub phase_shift: f64,
}

pub const WAVES: [Wave; 3] = [
    Wave {
        frequency: 3.0,
        base_amplitude: 0.4,
        color: Color::BLUE,
        line_width: Pt::new(4.0),
        offset: 0.03,
        phase_shift: 0.25,
    },
    Wave {
        frequency: 6.0,
        base_amplitude: 0.35,
        color: Color::RED,
        line_width: Pt::new(3.0),
        offset: 0.02,
        phase_shift: 0.0,
    },
    Wave {
        frequency: 14.0,
        base_amplitude: 0.35,
        color: Color::GREEN,
        line_width: Pt::new(2.0),
        offset: 0.01,
        phase_shift: 0.0,
    },
];

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Rescales `values` linearly onto `[0, 1]`.
pub fn normalize_unit(values: &[f64]) -> anyhow::Result<Vec<f64>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        bail!("cannot normalize a curve with zero range");
    }
    Ok(values.iter().map(|v| (v - min) / range).collect())
}

/// Per-sample weights of the falling, rising and linear curves.
///
/// Each raw curve is normalized to `[0, 1]`, then the three are divided by
/// their sum so they add up to one at every sample.
pub fn probability_weights(x: &[f64]) -> anyhow::Result<[Vec<f64>; 3]> {
    let falling: Vec<f64> = x.iter().map(|v| (1.0 - v).powi(4)).collect();
    let rising: Vec<f64> = x.iter().map(|v| v.powf(1.5)).collect();
    let linear: Vec<f64> = x.iter().map(|v| 0.3 * v).collect();

    let curves = [
        normalize_unit(&falling)?,
        normalize_unit(&rising)?,
        normalize_unit(&linear)?,
    ];

    let mut weights = [
        Vec::with_capacity(x.len()),
        Vec::with_capacity(x.len()),
        Vec::with_capacity(x.len()),
    ];
    for i in 0..x.len() {
        let total: f64 = curves.iter().map(|c| c[i]).sum();
        if total <= 0.0 {
            bail!("probability weights sum to zero at sample {i}");
        }
        for (w, c) in weights.iter_mut().zip(&curves) {
            w.push(c[i] / total);
        }
    }
    Ok(weights)
}

/// Shared geometry of the oscillation overlay.
#[derive(Debug, Clone)]
pub struct OscillationGeometry {
    pub x: Vec<f64>,
    pub weights: [Vec<f64>; 3],
    /// Small shared wobble added to every wave.
    pub jitter: Vec<f64>,
    pub mantle_radius: f64,
    pub amplitude_scale: f64,
}

impl OscillationGeometry {
    pub fn new() -> anyhow::Result<Self> {
        let x = linspace(0.0, 1.0, SAMPLE_COUNT);
        let weights = probability_weights(&x)?;
        let jitter = x
            .iter()
            .map(|v| JITTER_AMPLITUDE * v * (JITTER_FREQUENCY * v).sin())
            .collect();
        let mantle_radius = LAYERS[MANTLE].radius();
        Ok(Self {
            x,
            weights,
            jitter,
            mantle_radius,
            amplitude_scale: mantle_radius - LAYERS[CORE].radius(),
        })
    }

    /// Visible samples of wave `index`.
    ///
    /// # Panics
    /// If `index` is not below 3.
    pub fn trace(&self, index: usize, wave: &Wave) -> WaveTrace {
        let weight = &self.weights[index];
        let x_shift = X_OFFSET_BASE * (1.2 - 0.1 * index as f64);
        let r_sq = self.mantle_radius * self.mantle_radius;

        let mut points = Vec::new();
        // Markers sit on the wave without the jitter term.
        let mut baseline = Vec::new();
        let mut weight_sum = 0.0;
        for (i, &x) in self.x.iter().enumerate() {
            let y = (2.0 * PI * wave.frequency * x + wave.phase_shift).sin()
                * wave.base_amplitude
                * weight[i]
                * self.amplitude_scale;
            let px = x + x_shift;
            let py = CENTER[1] + y + self.jitter[i] * wave.offset * index as f64;

            let (dx, dy) = (px - CENTER[0], py - CENTER[1]);
            if dx * dx + dy * dy <= r_sq {
                points.push([px, py]);
                baseline.push([px, CENTER[1] + y]);
                weight_sum += weight[i];
            }
        }

        let mean_weight = if points.is_empty() {
            0.0
        } else {
            weight_sum / points.len() as f64
        };
        let markers = baseline.into_iter().step_by(MARKER_STRIDE).collect();
        WaveTrace {
            line_width: wave.line_width * (1.3 + 0.7 * mean_weight) as f32,
            points,
            markers,
            mean_weight,
        }
    }
}

/// Visible part of one wave.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTrace {
    pub points: Vec<[f64; 2]>,
    pub markers: Vec<[f64; 2]>,
    pub line_width: Pt,
    pub mean_weight: f64,
}

/// Queues the three waves and their markers.
pub fn draw_oscillations(context: &mut Context) -> anyhow::Result<Vec<WaveTrace>> {
    let geometry = OscillationGeometry::new()?;
    let mut traces = Vec::with_capacity(WAVES.len());

    for (i, wave) in WAVES.iter().enumerate() {
        let trace = geometry.trace(i, wave);
        if trace.points.is_empty() {
            tracing::warn!(wave = i, "wave has no samples inside the mantle, skipping");
            traces.push(trace);
            continue;
        }
        tracing::debug!(
            wave = i,
            visible = trace.points.len(),
            markers = trace.markers.len(),
            line_width = %trace.line_width,
            "queued wave"
        );

        Polyline::new(trace.points.clone(), wave.color)
            .with_width(trace.line_width)
            .draw(context, DrawOption::default().with_zorder(3.0 + i as f32));
        Markers::new(trace.markers.clone(), MARKER_AREA, Color::MAGENTA).draw(
            context,
            DrawOption::default()
                .with_zorder(MARKER_ZORDER)
                .with_opacity(MARKER_OPACITY),
        );
        traces.push(trace);
    }
    Ok(traces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linspace_endpoints() {
        let x = linspace(0.0, 1.0, SAMPLE_COUNT);
        assert_eq!(x.len(), SAMPLE_COUNT);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[SAMPLE_COUNT - 1], 1.0);
        assert_abs_diff_eq!(x[1], 1.0 / 999.0, epsilon = 1e-15);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_normalize_rejects_flat_curve() {
        assert!(normalize_unit(&[2.0, 2.0, 2.0]).is_err());
        assert_eq!(normalize_unit(&[1.0, 3.0, 2.0]).unwrap(), vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let x = linspace(0.0, 1.0, SAMPLE_COUNT);
        let [a, b, c] = probability_weights(&x).unwrap();
        for i in 0..SAMPLE_COUNT {
            assert_abs_diff_eq!(a[i] + b[i] + c[i], 1.0, epsilon = 1e-12);
        }
        // falling curve owns the left end, the other two share the right end
        assert_abs_diff_eq!(a[0], 1.0);
        assert_abs_diff_eq!(a[SAMPLE_COUNT - 1], 0.0);
        assert_abs_diff_eq!(b[SAMPLE_COUNT - 1], 0.5);
    }

    #[test]
    fn test_visible_points_stay_in_mantle() {
        let geometry = OscillationGeometry::new().unwrap();
        assert_abs_diff_eq!(geometry.amplitude_scale, 0.18, epsilon = 1e-12);
        for (i, wave) in WAVES.iter().enumerate() {
            let trace = geometry.trace(i, wave);
            assert!(!trace.points.is_empty());
            assert!(trace.points.len() < SAMPLE_COUNT);
            for p in &trace.points {
                let d = ((p[0] - 0.5).powi(2) + (p[1] - 0.5).powi(2)).sqrt();
                assert!(d <= geometry.mantle_radius + 1e-12);
            }
        }
    }

    #[test]
    fn test_markers_every_fiftieth_visible_point() {
        let geometry = OscillationGeometry::new().unwrap();
        let trace = geometry.trace(0, &WAVES[0]);
        assert_eq!(trace.markers.len(), trace.points.len().div_ceil(MARKER_STRIDE));
        assert_eq!(trace.markers[0], trace.points[0]);
        assert_eq!(trace.markers[1], trace.points[MARKER_STRIDE]);
    }

    #[test]
    fn test_markers_leave_out_jitter() {
        let geometry = OscillationGeometry::new().unwrap();
        let wave = &WAVES[2];
        let trace = geometry.trace(2, wave);
        let x_shift = X_OFFSET_BASE * (1.2 - 0.1 * 2.0);
        let mut shifted = 0;
        for (k, marker) in trace.markers.iter().enumerate() {
            let drawn = trace.points[k * MARKER_STRIDE];
            assert_eq!(marker[0], drawn[0]);

            let i = geometry.x.iter().position(|&x| x + x_shift == marker[0]).unwrap();
            let y = (2.0 * PI * wave.frequency * geometry.x[i] + wave.phase_shift).sin()
                * wave.base_amplitude
                * geometry.weights[2][i]
                * geometry.amplitude_scale;
            assert_abs_diff_eq!(marker[1], 0.5 + y, epsilon = 1e-12);
            let jitter = geometry.jitter[i] * wave.offset * 2.0;
            assert_abs_diff_eq!(drawn[1] - marker[1], jitter, epsilon = 1e-12);
            if drawn[1] != marker[1] {
                shifted += 1;
            }
        }
        assert!(shifted > 0);
    }

    #[test]
    fn test_line_width_scales_with_mean_weight() {
        let geometry = OscillationGeometry::new().unwrap();
        for (i, wave) in WAVES.iter().enumerate() {
            let trace = geometry.trace(i, wave);
            assert!(trace.mean_weight > 0.0 && trace.mean_weight < 1.0);
            let lw = trace.line_width.as_f32();
            assert!(lw >= wave.line_width.as_f32() * 1.3);
            assert!(lw <= wave.line_width.as_f32() * 2.0);
        }
    }

    #[test]
    fn test_draw_queues_line_and_markers_per_wave() {
        let mut ctx = Context::new(&crate::LogoConfig::default()).unwrap();
        let traces = draw_oscillations(&mut ctx).unwrap();
        assert_eq!(traces.len(), 3);
        assert_eq!(ctx.sorted_commands().len(), 6);
    }
}

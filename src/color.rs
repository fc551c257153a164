//! RGBA colours and the linear colormap used by the wordmark.

use anyhow::anyhow;
use plotters::style::RGBAColor;

/// Straight (non-premultiplied) RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// CSS `green`, which is half intensity.
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color([r, g, b, 1.0])
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    pub fn alpha(&self) -> f32 {
        self.0[3]
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Backend colour with `opacity` folded into the alpha channel.
    pub(crate) fn to_backend(self, opacity: f32) -> RGBAColor {
        let [r, g, b, _] = self.to_rgba8();
        let alpha = (self.alpha() * opacity).clamp(0.0, 1.0);
        RGBAColor(r, g, b, alpha as f64)
    }

    fn lerp(a: Color, b: Color, t: f32) -> Color {
        let mut out = [0.0f32; 4];
        for (i, c) in out.iter_mut().enumerate() {
            *c = a.0[i] + (b.0[i] - a.0[i]) * t;
        }
        Color(out)
    }
}

/// Linear colormap through evenly spaced colour stops.
///
/// Lookups go through a fixed-size table the way plotting colormaps do, so
/// `sample(t)` is piecewise constant in steps of `1 / lut_size`.
#[derive(Debug, Clone)]
pub struct Gradient {
    lut: Vec<Color>,
}

impl Gradient {
    pub const DEFAULT_LUT_SIZE: usize = 256;

    pub fn from_colors(stops: &[Color]) -> anyhow::Result<Self> {
        Self::with_lut_size(stops, Self::DEFAULT_LUT_SIZE)
    }

    pub fn with_lut_size(stops: &[Color], lut_size: usize) -> anyhow::Result<Self> {
        if stops.len() < 2 {
            return Err(anyhow!("a gradient needs at least two colour stops"));
        }
        if lut_size < 2 {
            return Err(anyhow!("gradient lookup table needs at least two entries"));
        }
        let segments = (stops.len() - 1) as f32;
        let lut = (0..lut_size)
            .map(|i| {
                let pos = i as f32 / (lut_size - 1) as f32 * segments;
                let seg = (pos.floor() as usize).min(stops.len() - 2);
                Color::lerp(stops[seg], stops[seg + 1], pos - seg as f32)
            })
            .collect();
        Ok(Self { lut })
    }

    /// Colour at `t` in `0.0..=1.0`; values outside are clamped.
    pub fn sample(&self, t: f32) -> Color {
        let n = self.lut.len();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let idx = ((t * n as f32) as usize).min(n - 1);
        self.lut[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_backend_colour_folds_opacity() {
        let c = Color::MAGENTA.to_backend(0.6);
        assert_eq!((c.0, c.1, c.2), (255, 0, 255));
        assert_abs_diff_eq!(c.3, 0.6, epsilon = 1e-6);
        assert_eq!(Color::GREEN.to_backend(1.0).1, 128);
        assert_abs_diff_eq!(Color::RED.to_backend(3.0).3, 1.0);
    }

    #[test]
    fn test_gradient_endpoints_and_middle() {
        let g = Gradient::from_colors(&[Color::RED, Color::GREEN, Color::BLUE]).unwrap();
        assert_eq!(g.sample(0.0), Color::RED);
        assert_eq!(g.sample(1.0), Color::BLUE);

        // Index 128 of 256 sits just past the middle stop.
        let mid = g.sample(0.5);
        assert_abs_diff_eq!(mid.0[0], 0.0);
        assert!(mid.0[1] > 0.45 && mid.0[1] < 0.51);
        assert!(mid.0[2] < 0.01);
    }

    #[test]
    fn test_gradient_clamps() {
        let g = Gradient::from_colors(&[Color::BLACK, Color::WHITE]).unwrap();
        assert_eq!(g.sample(-3.0), Color::BLACK);
        assert_eq!(g.sample(7.0), Color::WHITE);
        assert!(Gradient::from_colors(&[Color::BLACK]).is_err());
    }
}

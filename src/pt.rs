use std::fmt::Display;

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// A length in typographic points (1/72 inch).
///
/// Line widths, font sizes and marker sizes are given in points and only become
/// pixels once a dpi is known, see [`Pt::to_px`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pt(pub(crate) f32);

impl Display for Pt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

impl PartialEq for Pt {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Pt {
    pub const fn new(value: f32) -> Self {
        Pt(value)
    }

    pub fn as_f32(self) -> f32 {
        self.0
    }

    /// Converts to device pixels at the given resolution.
    pub fn to_px(self, dpi: f32) -> f32 {
        let v = self.0 * dpi / POINTS_PER_INCH;
        if v.is_finite() { v } else { 0.0 }
    }
}

impl std::ops::Add for Pt {
    type Output = Pt;
    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_points_to_pixels() {
        assert_abs_diff_eq!(Pt(72.0).to_px(100.0), 100.0);
        assert_abs_diff_eq!(Pt(4.0).to_px(100.0), 5.5555553, epsilon = 1e-5);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(Pt(f32::NAN).to_px(100.0), 0.0);
        assert_eq!(Pt(f32::INFINITY).to_px(100.0), 0.0);
    }
}

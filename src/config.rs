use std::path::PathBuf;

use crate::color::Color;

/// File name the logo is written to.
pub const OUTPUT_FILE_NAME: &str = "NuOscillatorLogo.png";

/// Output settings for one logo render.
///
/// The binary only ever uses [`LogoConfig::default`]; the setters exist for
/// tests that render into a scratch directory or at a lower resolution.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    /// Edge length of the square figure, in inches.
    pub figure_size: f32,
    pub dpi: f32,
    pub output: PathBuf,
    /// Margin kept around the inked area when cropping, in inches.
    pub pad_inches: f32,
    pub background: Color,
    pub log_level: tracing::Level,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            figure_size: 12.0,
            dpi: 100.0,
            output: PathBuf::from(OUTPUT_FILE_NAME),
            pad_inches: 0.1,
            background: Color::WHITE,
            log_level: tracing::Level::INFO,
        }
    }
}

impl LogoConfig {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Figure edge length in device pixels.
    pub fn figure_px(&self) -> u32 {
        (self.figure_size * self.dpi).round().max(1.0) as u32
    }

    pub fn pad_px(&self) -> u32 {
        (self.pad_inches * self.dpi).round().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_figure() {
        let config = LogoConfig::default();
        assert_eq!(config.figure_px(), 1200);
        assert_eq!(config.pad_px(), 10);
        assert_eq!(config.output, PathBuf::from("NuOscillatorLogo.png"));
    }

    #[test]
    fn test_setters() {
        let config = LogoConfig::default().with_dpi(50.0).with_output("/tmp/x.png");
        assert_eq!(config.figure_px(), 600);
        assert_eq!(config.pad_px(), 5);
        assert_eq!(config.output, PathBuf::from("/tmp/x.png"));
    }
}

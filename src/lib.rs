//! NuOscillator logo - a small retained-mode 2D renderer and the logo built on it.
//!
//! Drawing happens in two steps. Shapes and text are queued on a [`Context`]
//! in data coordinates; [`Graphics`] then paints the queue onto a `plotters`
//! bitmap in z-order and crops the result to the inked area.
//!
//! # Example
//! ```no_run
//! use nuosc_logo::{LogoConfig, generate};
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = generate(&LogoConfig::default())?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

mod color;
mod config;
mod drawable;
pub mod font;
mod glyph_cache;
mod graphics;
pub mod logo;
mod pt;
mod shape;
mod telemetry;
mod text;
mod viewport;

use std::path::PathBuf;

use drawable::DrawCommand;
use image::RgbImage;

pub use color::{Color, Gradient};
pub use config::{LogoConfig, OUTPUT_FILE_NAME};
pub use drawable::DrawOption;
pub use font::FontBook;
pub use graphics::{Graphics, encode_png, save_png};
pub use pt::Pt;
pub use shape::{Arrow, Disk, Markers, Polyline};
pub use telemetry::init_tracing;
pub use text::{HAlign, Text, TextMetrics, VAlign};
pub use viewport::Viewport;

/// Drawing context for collecting render commands.
///
/// The context owns the fonts used by queued text and the viewport the
/// commands will be drawn through, so text can be measured before it is
/// placed.
#[derive(Debug)]
pub struct Context {
    draw_list: Vec<DrawCommand>,
    fonts: FontBook,
    viewport: Viewport,
    bold_font: u32,
    math_font: u32,
}

impl Context {
    /// Creates an empty context with the embedded faces registered.
    pub fn new(config: &LogoConfig) -> anyhow::Result<Self> {
        let mut fonts = FontBook::new();
        let bold_font = fonts.register_static_font(font::DEJAVU_SANS_BOLD)?;
        let math_font = fonts.register_static_font(font::DEJAVU_SANS_OBLIQUE)?;
        Ok(Self {
            draw_list: Vec::new(),
            fonts,
            viewport: Viewport::from_config(config),
            bold_font,
            math_font,
        })
    }

    pub(crate) fn push(&mut self, drawable: DrawCommand) {
        self.draw_list.push(drawable);
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Font id of DejaVu Sans Bold.
    pub fn bold_font(&self) -> u32 {
        self.bold_font
    }

    /// Font id of the oblique face used for math symbols.
    pub fn math_font(&self) -> u32 {
        self.math_font
    }

    /// Ink metrics of `text` in pixels at the context's resolution.
    pub fn measure_text(&self, text: &Text) -> anyhow::Result<TextMetrics> {
        text.measure(&self.fonts, self.viewport.dpi())
    }

    /// Queued commands in paint order: ascending z-order, ties in queue order.
    pub(crate) fn sorted_commands(&self) -> Vec<&DrawCommand> {
        let mut commands: Vec<&DrawCommand> = self.draw_list.iter().collect();
        commands.sort_by(|a, b| a.options().zorder().total_cmp(&b.options().zorder()));
        commands
    }
}

/// Composes and rasterizes the logo, cropped to its ink plus padding.
pub fn render(config: &LogoConfig) -> anyhow::Result<RgbImage> {
    let mut context = Context::new(config)?;
    let summary = logo::compose(&mut context)?;

    let mut graphics = Graphics::new(config);
    graphics.draw_context(&context)?;
    let image = graphics.crop(config.pad_px());
    tracing::info!(
        commands = summary.commands,
        width = image.width(),
        height = image.height(),
        "rendered logo"
    );
    Ok(image)
}

/// Renders the logo and writes it to `config.output`.
pub fn generate(config: &LogoConfig) -> anyhow::Result<PathBuf> {
    let image = render(config)?;
    save_png(&image, &config.output)?;
    tracing::info!(path = %config.output.display(), "wrote logo");
    Ok(config.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable() {
        let mut ctx = Context::new(&LogoConfig::default()).unwrap();
        for (z, r) in [(2.0, 0.1), (1.0, 0.2), (2.0, 0.3), (1.0, 0.4)] {
            Disk::new([0.5, 0.5], r, Color::BLACK)
                .draw(&mut ctx, DrawOption::default().with_zorder(z));
        }
        let radii: Vec<f64> = ctx
            .sorted_commands()
            .into_iter()
            .map(|c| match c {
                DrawCommand::Disk(d, _) => d.radius,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(radii, vec![0.2, 0.4, 0.1, 0.3]);
    }

    #[test]
    fn test_context_registers_both_faces() {
        let ctx = Context::new(&LogoConfig::default()).unwrap();
        assert_eq!(ctx.fonts().len(), 2);
        assert_ne!(ctx.bold_font(), ctx.math_font());
        let m = ctx
            .measure_text(&Text::new("N", ctx.bold_font()).with_font_size(Pt::new(120.0)))
            .unwrap();
        assert!(m.width > 100.0);
    }
}

use crate::config::LogoConfig;
use crate::pt::Pt;

/// Subplot box as fractions of the figure: left, bottom, width, height.
const SUBPLOT_BOX: [f32; 4] = [0.125, 0.11, 0.775, 0.77];

/// Maps data coordinates and point sizes onto device pixels.
///
/// The data space is the unit square `[0,1]×[0,1]` with y pointing up. It is
/// drawn into a square frame centered inside the subplot box, so one data unit
/// is `side` pixels in both directions. Pixel coordinates have their origin in
/// the top-left corner of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    figure: [f32; 2],
    dpi: f32,
    origin: [f32; 2],
    side: f32,
}

impl Viewport {
    pub fn new(figure_width: f32, figure_height: f32, dpi: f32) -> Self {
        let [left, bottom, width, height] = SUBPLOT_BOX;
        let box_w = width * figure_width;
        let box_h = height * figure_height;
        let side = box_w.min(box_h);
        let x0 = left * figure_width + (box_w - side) / 2.0;
        let y0_from_bottom = bottom * figure_height + (box_h - side) / 2.0;
        let top = figure_height - y0_from_bottom - side;
        Self {
            figure: [figure_width, figure_height],
            dpi,
            origin: [x0, top],
            side,
        }
    }

    pub fn from_config(config: &LogoConfig) -> Self {
        let px = config.figure_px() as f32;
        Self::new(px, px, config.dpi)
    }

    pub fn figure_size(&self) -> [f32; 2] {
        self.figure
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn data_to_px(&self, point: [f64; 2]) -> [f32; 2] {
        [
            self.origin[0] + point[0] as f32 * self.side,
            self.origin[1] + (1.0 - point[1] as f32) * self.side,
        ]
    }

    /// Converts a data-space length to pixels.
    pub fn len_to_px(&self, len: f64) -> f32 {
        len as f32 * self.side
    }

    /// Converts a horizontal pixel length to a fraction of the figure width.
    pub fn px_to_figure_fraction(&self, px: f32) -> f64 {
        px as f64 / self.figure[0] as f64
    }

    pub fn pt_to_px(&self, pt: Pt) -> f32 {
        pt.to_px(self.dpi)
    }
}

//! Cropping and PNG output.

use std::path::Path;

use anyhow::Context as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

use super::Graphics;

impl Graphics {
    /// Copies the inked area plus `pad` pixels on every side.
    ///
    /// With nothing drawn, the figure itself is returned.
    pub fn crop(&self, pad: u32) -> RgbImage {
        let [fw, fh] = self.viewport.figure_size();
        let [x0, y0, x1, y1] = match self.ink_bounds() {
            Some([x0, y0, x1, y1]) => {
                let pad = pad as i32;
                [x0 - pad, y0 - pad, x1 + pad, y1 + pad]
            }
            None => [0, 0, fw.ceil() as i32, fh.ceil() as i32],
        };

        let (w, h) = (self.size.0 as i32, self.size.1 as i32);
        let cx0 = (x0 + self.margin[0]).clamp(0, w);
        let cy0 = (y0 + self.margin[1]).clamp(0, h);
        let cx1 = (x1 + self.margin[0]).clamp(0, w);
        let cy1 = (y1 + self.margin[1]).clamp(0, h);
        RgbImage::from_fn((cx1 - cx0) as u32, (cy1 - cy0) as u32, |x, y| {
            let cx = cx0 as usize + x as usize;
            let cy = cy0 as usize + y as usize;
            let i = (cy * self.size.0 as usize + cx) * 3;
            Rgb([self.canvas[i], self.canvas[i + 1], self.canvas[i + 2]])
        })
    }
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .context("failed to encode PNG")?;
    Ok(bytes)
}

/// Writes `image` to `path` as a PNG file, replacing any existing file.
pub fn save_png(image: &RgbImage, path: &Path) -> anyhow::Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

//! Draw-list rendering.

use crate::Context;
use crate::drawable::DrawCommand;

use super::Graphics;

impl Graphics {
    /// Paints every command queued on `context`.
    ///
    /// Commands are painted in ascending z-order; commands sharing a z-order
    /// keep the order they were queued in.
    pub fn draw_context(&mut self, context: &Context) -> anyhow::Result<()> {
        let commands = context.sorted_commands();
        tracing::debug!(count = commands.len(), "rendering draw list");

        self.paint(|painter| {
            let viewport = *painter.viewport;
            for command in commands {
                let opts = command.options();
                match command {
                    DrawCommand::Disk(disk, _) => {
                        let center = viewport.data_to_px(opts.translate(disk.center));
                        let radius = viewport.len_to_px(disk.radius);
                        let color = disk.color.to_backend(opts.opacity());
                        painter.fill_disk(center, radius, color)?;
                    }
                    DrawCommand::Polyline(line, _) => {
                        let points: Vec<[f32; 2]> = line
                            .points
                            .iter()
                            .map(|p| viewport.data_to_px(opts.translate(*p)))
                            .collect();
                        let width = viewport.pt_to_px(line.width);
                        let color = line.color.to_backend(opts.opacity());
                        painter.stroke_path(&points, width, color)?;
                    }
                    DrawCommand::Markers(markers, _) => {
                        let radius = viewport.pt_to_px(markers.diameter()) / 2.0;
                        let color = markers.color.to_backend(opts.opacity());
                        // Each marker is its own disc; overlapping translucent
                        // markers darken where they meet.
                        for p in &markers.points {
                            let center = viewport.data_to_px(opts.translate(*p));
                            painter.fill_disk(center, radius, color)?;
                        }
                    }
                    DrawCommand::Arrow(arrow, _) => {
                        let width = viewport.pt_to_px(arrow.width);
                        let color = arrow.color.to_backend(opts.opacity());
                        for path in arrow.paths_px(&viewport, opts) {
                            painter.stroke_path(&path, width, color)?;
                        }
                    }
                    DrawCommand::Text(text, _) => {
                        painter.draw_text(text, opts, context.fonts())?;
                    }
                }
            }
            Ok(())
        })?;
        tracing::debug!(glyphs = self.glyph_cache.len(), "draw list painted");
        Ok(())
    }
}

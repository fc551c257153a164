//! Arrow from the atmosphere edge into the mantle, labelled with ν.

use super::layers::{ATMOSPHERE, CENTER, LAYERS, MANTLE};
use crate::color::Color;
use crate::shape::Arrow;
use crate::text::{HAlign, Text, VAlign};
use crate::{Context, DrawOption, Pt};

pub const ARROW_Y: f64 = 0.52;
pub const LABEL: &str = "\u{3bd}";

/// Queues the arrow and its label.
pub fn draw_annotation(context: &mut Context) {
    let from = [CENTER[0] - LAYERS[ATMOSPHERE].radius(), ARROW_Y];
    let to = [CENTER[0] - LAYERS[MANTLE].radius(), ARROW_Y];

    Arrow::new(from, to)
        .with_width(Pt::new(8.0))
        .with_color(Color::BLACK)
        .with_head(0.18, 0.12, 30.0)
        .with_shrink(Pt::new(2.0))
        .draw(context, DrawOption::default().with_zorder(4.0));

    let label_at = [from[0] + 0.08, ARROW_Y + 0.03];
    Text::new(LABEL, context.math_font())
        .with_font_size(Pt::new(40.0))
        .with_color(Color::BLACK)
        .with_stroke_width(Pt::new(4.0))
        .with_stroke_color(Color::WHITE)
        .with_align(HAlign::Center, VAlign::Bottom)
        .draw(context, DrawOption::new(label_at, 6.0));

    tracing::debug!(?from, ?to, "queued arrow annotation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogoConfig;
    use crate::drawable::DrawCommand;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arrow_spans_atmosphere_to_mantle() {
        let mut ctx = Context::new(&LogoConfig::default()).unwrap();
        draw_annotation(&mut ctx);
        let commands = ctx.sorted_commands();
        assert_eq!(commands.len(), 2);

        let DrawCommand::Arrow(arrow, opts) = commands[0] else {
            panic!("expected the arrow first");
        };
        let (from, to) = (arrow.from, arrow.to);
        assert_abs_diff_eq!(from[0], 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(to[0], 0.185, epsilon = 1e-12);
        assert_eq!(from[1], ARROW_Y);
        assert_eq!(opts.zorder(), 4.0);

        let DrawCommand::Text(text, opts) = commands[1] else {
            panic!("expected the label last");
        };
        assert_eq!(text.content, LABEL);
        assert_eq!(text.font_id, ctx.math_font());
        assert_abs_diff_eq!(opts.position()[0], 0.13, epsilon = 1e-12);
        assert_abs_diff_eq!(opts.position()[1], 0.55, epsilon = 1e-12);
    }
}

//! The gradient "NuOscillator" wordmark.
//!
//! Letters are placed one at a time. Each letter is measured on its own and the
//! cursor advances by that letter's ink width taken as a fraction of the figure
//! width. Positions are in data units, which are wider than that fraction, so
//! neighbouring letters overlap slightly. The whole run is centered on x = 0.5.

use crate::color::{Color, Gradient};
use crate::text::{HAlign, Text, VAlign};
use crate::{Context, DrawOption, Pt};

pub const WORDMARK: &str = "NuOscillator";
pub const FONT_SIZE: Pt = Pt::new(120.0);
pub const CENTER_Y: f64 = 0.15;
pub const STROKE_WIDTH: Pt = Pt::new(4.0);
pub const ZORDER: f32 = 5.0;

/// Colormap stops, sampled from the first letter to the last.
pub const GRADIENT_STOPS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Horizontal placement of each letter.
///
/// `x` and `start` are data coordinates; widths are fractions of the figure
/// width.
#[derive(Debug, Clone, PartialEq)]
pub struct WordmarkLayout {
    pub letters: Vec<PlacedLetter>,
    pub total_width: f64,
    pub start: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLetter {
    pub letter: char,
    pub x: f64,
    pub width: f64,
}

fn letter_text(letter: char, font_id: u32) -> Text {
    Text::new(letter.to_string(), font_id)
        .with_font_size(FONT_SIZE)
        .with_stroke_width(STROKE_WIDTH)
        .with_stroke_color(Color::WHITE)
        .with_align(HAlign::Left, VAlign::Center)
}

/// Measures every letter of `word` and centers the run on x = 0.5.
pub fn layout_wordmark(context: &Context, word: &str) -> anyhow::Result<WordmarkLayout> {
    let font_id = context.bold_font();
    let mut widths = Vec::with_capacity(word.len());
    for letter in word.chars() {
        let metrics = context.measure_text(&letter_text(letter, font_id))?;
        widths.push((letter, context.viewport().px_to_figure_fraction(metrics.width)));
    }

    let total_width: f64 = widths.iter().map(|(_, w)| w).sum();
    let start = 0.5 - total_width / 2.0;

    let mut cursor = start;
    let letters = widths
        .into_iter()
        .map(|(letter, width)| {
            let placed = PlacedLetter {
                letter,
                x: cursor,
                width,
            };
            cursor += width;
            placed
        })
        .collect();

    Ok(WordmarkLayout {
        letters,
        total_width,
        start,
    })
}

/// Queues the wordmark letter by letter.
pub fn draw_wordmark(context: &mut Context) -> anyhow::Result<WordmarkLayout> {
    let layout = layout_wordmark(context, WORDMARK)?;
    let gradient = Gradient::from_colors(&GRADIENT_STOPS)?;
    let font_id = context.bold_font();
    let last = layout.letters.len().saturating_sub(1).max(1) as f32;

    for (i, placed) in layout.letters.iter().enumerate() {
        letter_text(placed.letter, font_id)
            .with_color(gradient.sample(i as f32 / last))
            .draw(context, DrawOption::new([placed.x, CENTER_Y], ZORDER));
    }

    tracing::info!(
        letters = layout.letters.len(),
        total_width = layout.total_width,
        start = layout.start,
        "queued wordmark"
    );
    Ok(layout)
}

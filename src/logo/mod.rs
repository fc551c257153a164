//! Composition of the NuOscillator logo.
//!
//! Each part queues its draw commands on a [`Context`]; nothing is rasterized
//! until the context is handed to [`Graphics`](crate::Graphics).

pub mod annotation;
pub mod layers;
pub mod oscillation;
pub mod wordmark;

use crate::Context;

pub use oscillation::WaveTrace;
pub use wordmark::WordmarkLayout;

/// What [`compose`] queued, for logging and tests.
#[derive(Debug, Clone)]
pub struct LogoSummary {
    pub waves: Vec<WaveTrace>,
    pub wordmark: WordmarkLayout,
    pub commands: usize,
}

/// Queues the complete logo on `context`.
pub fn compose(context: &mut Context) -> anyhow::Result<LogoSummary> {
    layers::draw_layers(context);
    let waves = oscillation::draw_oscillations(context)?;
    annotation::draw_annotation(context);
    let wordmark = wordmark::draw_wordmark(context)?;

    let commands = context.sorted_commands().len();
    tracing::info!(commands, "composed logo");
    Ok(LogoSummary {
        waves,
        wordmark,
        commands,
    })
}

//! Graphics module - split into focused submodules for readability.
//!
//! This module paints a [`Context`](crate::Context) draw list through a
//! `plotters` bitmap drawing area and writes the cropped result out as PNG.

mod core;
mod export;
mod font;
mod render;
mod text_layout;

pub use core::Graphics;
pub use export::{encode_png, save_png};

//! Color values handed to the renderer.

mod color;

pub use color::Color;

//! Color types used for clears and shader tints.

mod color;

pub use color::Color;

//! Kiln engine crate.
//!
//! Owns the platform + GPU runtime pieces the exercise tasks are built on: window and
//! render loop, frame pacing, shader/buffer/texture helpers and transforms.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod paint;
pub mod render;
pub mod transform;

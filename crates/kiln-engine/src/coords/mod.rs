//! Window-space size types shared by the runtime and renderers.
//!
//! Exercise geometry is authored directly in normalized device coordinates, so the
//! only thing renderers need from the window is its logical size (for aspect ratio).

mod viewport;

pub use viewport::Viewport;

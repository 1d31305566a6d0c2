//! CPU-side geometry: vertex formats, meshes and the exercise shapes.
//!
//! Convention:
//! - positions are authored in normalized device coordinates (-1..1, +Y up)
//! - texture coordinate v = 0 samples the image file's first row, as an unflipped GL
//!   upload does

mod circle;
mod mesh;
mod shapes;
mod vertex;

pub use circle::{circle_outline, DEFAULT_CIRCLE_SEGMENTS};
pub use mesh::{Mesh, Topology};
pub use shapes::{colored_triangle, rectangle, textured_triangle, triangle};
pub use vertex::{ColorVertex, PosVertex, TexturedVertex, Vertex, VertexKind};

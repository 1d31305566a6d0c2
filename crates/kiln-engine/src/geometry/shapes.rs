//! Fixed meshes used by the exercises.

use super::mesh::{Mesh, Topology};
use super::vertex::{ColorVertex, PosVertex, TexturedVertex};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

/// Upright triangle spanning half the viewport.
pub fn triangle() -> Mesh<PosVertex> {
    Mesh::new(
        vec![
            PosVertex::new(-0.5, -0.5),
            PosVertex::new(0.5, -0.5),
            PosVertex::new(0.0, 0.5),
        ],
        Topology::Triangles,
    )
}

/// Centered square drawn as a fan.
pub fn rectangle() -> Mesh<PosVertex> {
    Mesh::new(
        vec![
            PosVertex::new(-0.5, -0.5),
            PosVertex::new(0.5, -0.5),
            PosVertex::new(0.5, 0.5),
            PosVertex::new(-0.5, 0.5),
        ],
        Topology::TriangleFan,
    )
}

/// Triangle with red, green and blue corners.
pub fn colored_triangle() -> Mesh<ColorVertex> {
    Mesh::new(
        vec![
            ColorVertex { pos: [-0.5, -0.5, 0.0], color: RED },
            ColorVertex { pos: [0.5, -0.5, 0.0], color: GREEN },
            ColorVertex { pos: [0.0, 0.5, 0.0], color: BLUE },
        ],
        Topology::Triangles,
    )
}

/// `colored_triangle` with texture coordinates covering the bottom edge and the top center.
pub fn textured_triangle() -> Mesh<TexturedVertex> {
    Mesh::new(
        vec![
            TexturedVertex { pos: [-0.5, -0.5, 0.0], color: RED, uv: [0.0, 0.0] },
            TexturedVertex { pos: [0.5, -0.5, 0.0], color: GREEN, uv: [1.0, 0.0] },
            TexturedVertex { pos: [0.0, 0.5, 0.0], color: BLUE, uv: [0.5, 1.0] },
        ],
        Topology::Triangles,
    )
}

use std::f32::consts::TAU;

use super::mesh::{Mesh, Topology};
use super::vertex::PosVertex;

/// Segment count used by the circle exercise.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 36;

/// Circle outline centered at the origin, drawn as a line loop.
///
/// Points are evenly spaced starting at `(radius, 0)` and running counter-clockwise.
/// `aspect` (viewport width / height) stretches Y so the circle stays round in NDC on
/// a non-square window.
pub fn circle_outline(segments: usize, radius: f32, aspect: f32) -> Mesh<PosVertex> {
    let vertices = (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            PosVertex::new(radius * theta.cos(), radius * theta.sin() * aspect)
        })
        .collect();

    Mesh::new(vertices, Topology::LineLoop)
}

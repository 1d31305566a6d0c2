use std::borrow::Cow;

use super::vertex::Vertex;

/// Primitive assembly for a mesh, in the vocabulary of the exercises.
///
/// wgpu has no fans or loops, so those are expanded on the CPU before upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Triangles,
    /// Triangles sharing the first vertex.
    TriangleFan,
    /// Connected line segments, last vertex joined back to the first.
    LineLoop,
    LineStrip,
}

impl Topology {
    /// Primitive topology of the expanded vertex stream.
    pub fn primitive(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Triangles | Topology::TriangleFan => wgpu::PrimitiveTopology::TriangleList,
            Topology::LineLoop | Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }
}

/// CPU mesh: vertices in authoring order plus how to assemble them.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<V: Vertex> {
    pub vertices: Vec<V>,
    pub topology: Topology,
}

impl<V: Vertex> Mesh<V> {
    #[inline]
    pub fn new(vertices: Vec<V>, topology: Topology) -> Self {
        Self { vertices, topology }
    }

    /// Vertex stream ready for `Topology::primitive()`.
    ///
    /// Fans become a triangle list; loops repeat the first vertex at the end.
    /// Degenerate inputs (too few vertices for one primitive) expand to nothing.
    pub fn expanded(&self) -> Cow<'_, [V]> {
        let v = &self.vertices;
        match self.topology {
            Topology::Triangles => {
                let whole = v.len() - v.len() % 3;
                Cow::Borrowed(&v[..whole])
            }
            Topology::LineStrip => {
                if v.len() < 2 { Cow::Borrowed(&[]) } else { Cow::Borrowed(v) }
            }
            Topology::TriangleFan => {
                if v.len() < 3 {
                    return Cow::Borrowed(&[]);
                }
                let mut out = Vec::with_capacity((v.len() - 2) * 3);
                for i in 1..v.len() - 1 {
                    out.extend_from_slice(&[v[0], v[i], v[i + 1]]);
                }
                Cow::Owned(out)
            }
            Topology::LineLoop => {
                if v.len() < 2 {
                    return Cow::Borrowed(&[]);
                }
                let mut out = Vec::with_capacity(v.len() + 1);
                out.extend_from_slice(v);
                out.push(v[0]);
                Cow::Owned(out)
            }
        }
    }
}

use bytemuck::{Pod, Zeroable};

/// Vertex formats understood by `render::MeshRenderer`.
///
/// Each kind pairs with one shader.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexKind {
    /// 2D position only; color comes from the tint uniform.
    Position,
    /// 3D position + per-vertex RGB.
    Colored,
    /// 3D position + per-vertex RGB + texture coordinates.
    Textured,
}

/// GPU-uploadable vertex.
pub trait Vertex: Pod {
    const KIND: VertexKind;

    fn layout() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PosVertex {
    pub pos: [f32; 2],
}

impl PosVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }
}

impl Vertex for PosVertex {
    const KIND: VertexKind = VertexKind::Position;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PosVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3  // color
    ];
}

impl Vertex for ColorVertex {
    const KIND: VertexKind = VertexKind::Colored;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Layout (32 bytes):
///
///  offset  0  pos    [f32; 3]  loc 0
///  offset 12  color  [f32; 3]  loc 1
///  offset 24  uv     [f32; 2]  loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3, // color
        2 => Float32x2  // uv
    ];
}

impl Vertex for TexturedVertex {
    const KIND: VertexKind = VertexKind::Textured;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_packed_float_counts() {
        assert_eq!(PosVertex::layout().array_stride, 2 * 4);
        assert_eq!(ColorVertex::layout().array_stride, 6 * 4);
        assert_eq!(TexturedVertex::layout().array_stride, 8 * 4);
    }

    #[test]
    fn textured_attribute_offsets() {
        let layout = TexturedVertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }
}

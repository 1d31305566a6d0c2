use wgpu::util::DeviceExt;

use crate::geometry::{Mesh, Vertex, VertexKind};

/// Static vertex buffer uploaded from a CPU `Mesh`.
///
/// Created once at startup and dropped with the owning task.
pub struct GpuMesh {
    kind: VertexKind,
    topology: wgpu::PrimitiveTopology,
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    pub fn upload<V: Vertex>(device: &wgpu::Device, label: &str, mesh: &Mesh<V>) -> Self {
        let vertices = mesh.expanded();

        // Keep a non-empty allocation so the buffer is always bindable.
        let contents: &[u8] = if vertices.is_empty() {
            &[0u8; 4]
        } else {
            bytemuck::cast_slice(&vertices)
        };

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded mesh '{label}': {} vertices ({:?})", vertices.len(), mesh.topology);

        Self {
            kind: V::KIND,
            topology: mesh.topology.primitive(),
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    #[inline]
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    #[inline]
    pub fn topology(&self) -> wgpu::PrimitiveTopology {
        self.topology
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

//! GPU rendering subsystem.
//!
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - mesh positions are already in NDC; a per-renderer transform uniform is applied
//!   in the vertex shader (identity by default).

mod ctx;
mod mesh;
mod renderer;
mod shader;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::GpuMesh;
pub use renderer::MeshRenderer;
pub use shader::compile_shader;
pub use texture::{Texture, TextureData};

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::geometry::{ColorVertex, PosVertex, TexturedVertex, Vertex, VertexKind};
use crate::paint::Color;
use crate::render::{GpuMesh, RenderCtx, RenderTarget, Texture};

use super::shader::compile_shader;

/// Default tint for position-only meshes (the exercises' orange).
const DEFAULT_TINT: [f32; 3] = [1.0, 0.5, 0.2];

/// Renderer for `GpuMesh` draws of a single vertex kind.
///
/// Holds one transform and tint uniform. The uniform is written with
/// `Queue::write_buffer`, so every draw recorded through this renderer within one
/// frame sees the last values set; use one renderer per distinct transform.
///
/// Pipelines are created lazily per primitive topology and rebuilt when the surface
/// format changes.
pub struct MeshRenderer {
    kind: VertexKind,
    transform: Mat4,
    tint: Color,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Vec<(wgpu::PrimitiveTopology, wgpu::RenderPipeline)>,

    uniform_layout: Option<wgpu::BindGroupLayout>,
    texture_layout: Option<wgpu::BindGroupLayout>,
    uniform_bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,
    texture_bind_group: Option<wgpu::BindGroup>,

    warned_kind_mismatch: bool,
}

impl MeshRenderer {
    pub fn new(kind: VertexKind) -> Self {
        let tint = match kind {
            VertexKind::Position => Color::rgb(DEFAULT_TINT[0], DEFAULT_TINT[1], DEFAULT_TINT[2]),
            VertexKind::Colored | VertexKind::Textured => Color::WHITE,
        };

        Self {
            kind,
            transform: Mat4::IDENTITY,
            tint,
            pipeline_format: None,
            pipelines: Vec::new(),
            uniform_layout: None,
            texture_layout: None,
            uniform_bind_group: None,
            uniform_ubo: None,
            texture_bind_group: None,
            warned_kind_mismatch: false,
        }
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// Binds `texture` for subsequent draws. Ignored for non-textured renderers.
    pub fn set_texture(&mut self, ctx: &RenderCtx<'_>, texture: &Texture) {
        if self.kind != VertexKind::Textured {
            log::warn!("set_texture called on a {:?} renderer; ignored", self.kind);
            return;
        }
        self.ensure_layouts(ctx);
        let Some(layout) = self.texture_layout.as_ref() else { return };

        self.texture_bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("kiln mesh texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        }));
    }

    /// Records one render pass drawing `mesh` on top of the target's contents.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, mesh: &GpuMesh) {
        if mesh.kind() != self.kind {
            if !self.warned_kind_mismatch {
                log::warn!(
                    "mesh of kind {:?} drawn with a {:?} renderer; skipped",
                    mesh.kind(),
                    self.kind
                );
                self.warned_kind_mismatch = true;
            }
            return;
        }
        if mesh.vertex_count() == 0 {
            return;
        }

        self.ensure_layouts(ctx);
        self.ensure_bindings(ctx);
        if self.kind == VertexKind::Textured && self.texture_bind_group.is_none() {
            let white = Texture::white(ctx.device, ctx.queue);
            self.set_texture(ctx, &white);
        }
        self.write_uniform(ctx);

        let Some(index) = self.ensure_pipeline(ctx, mesh.topology()) else { return };
        let Some((_, pipeline)) = self.pipelines.get(index) else { return };
        let Some(uniform_bind_group) = self.uniform_bind_group.as_ref() else { return };

        let mut rpass = target.begin_pass("kiln mesh pass", None);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, uniform_bind_group, &[]);
        if let Some(texture_bind_group) = self.texture_bind_group.as_ref() {
            rpass.set_bind_group(1, texture_bind_group, &[]);
        }
        rpass.set_vertex_buffer(0, mesh.buffer().slice(..));
        rpass.draw(0..mesh.vertex_count(), 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        if self.uniform_layout.is_none() {
            self.uniform_layout = Some(ctx.device.create_bind_group_layout(
                &wgpu::BindGroupLayoutDescriptor {
                    label: Some("kiln mesh uniform bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<MeshUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                },
            ));
        }

        if self.kind == VertexKind::Textured && self.texture_layout.is_none() {
            self.texture_layout = Some(ctx.device.create_bind_group_layout(
                &wgpu::BindGroupLayoutDescriptor {
                    label: Some("kiln mesh texture bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                },
            ));
        }
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.uniform_bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(layout) = self.uniform_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("kiln mesh uniform ubo"),
            size: std::mem::size_of::<MeshUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("kiln mesh uniform bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(ubo);
        self.uniform_bind_group = Some(bind_group);
    }

    /// Returns the index into `pipelines` for `topology`, building it if needed.
    fn ensure_pipeline(
        &mut self,
        ctx: &RenderCtx<'_>,
        topology: wgpu::PrimitiveTopology,
    ) -> Option<usize> {
        if self.pipeline_format != Some(ctx.surface_format) {
            self.pipelines.clear();
            self.pipeline_format = Some(ctx.surface_format);
        }

        if let Some(i) = self.pipelines.iter().position(|(t, _)| *t == topology) {
            return Some(i);
        }

        let uniform_layout = self.uniform_layout.as_ref()?;
        let mut bind_group_layouts = vec![uniform_layout];
        if self.kind == VertexKind::Textured {
            bind_group_layouts.push(self.texture_layout.as_ref()?);
        }

        let (label, source, vertex_layout) = match self.kind {
            VertexKind::Position => {
                ("kiln flat", include_str!("shaders/flat.wgsl"), PosVertex::layout())
            }
            VertexKind::Colored => {
                ("kiln colored", include_str!("shaders/colored.wgsl"), ColorVertex::layout())
            }
            VertexKind::Textured => {
                ("kiln textured", include_str!("shaders/textured.wgsl"), TexturedVertex::layout())
            }
        };

        let shader = compile_shader(ctx.device, label, source);

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("kiln mesh pipeline layout"),
            bind_group_layouts: &bind_group_layouts,
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("built {label} pipeline for {topology:?} / {:?}", ctx.surface_format);

        self.pipelines.push((topology, pipeline));
        Some(self.pipelines.len() - 1)
    }

    fn write_uniform(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&MeshUniform::new(self.transform, self.tint)),
        );
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Uniform layout (80 bytes):
///
///  offset  0  transform  mat4x4<f32>  (column-major)
///  offset 64  tint       vec4<f32>    (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    transform: [[f32; 4]; 4],
    tint: [f32; 4],
}

impl MeshUniform {
    fn new(transform: Mat4, tint: Color) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            tint: tint.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_matches_wgsl_size() {
        assert_eq!(std::mem::size_of::<MeshUniform>(), 80);
    }

    #[test]
    fn uniform_stores_columns_in_order() {
        let m = Mat4::from_translation(Vec3::new(0.5, 0.5, 0.0));
        let u = MeshUniform::new(m, Color::WHITE);
        // Translation lives in the fourth column.
        assert_eq!(u.transform[3], [0.5, 0.5, 0.0, 1.0]);
        assert_eq!(u.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn position_renderer_defaults_to_orange() {
        let r = MeshRenderer::new(VertexKind::Position);
        assert_eq!(r.tint.to_array(), [1.0, 0.5, 0.2, 1.0]);
        assert_eq!(r.transform, Mat4::IDENTITY);
    }

    #[test]
    fn colored_renderer_defaults_to_neutral_tint() {
        let r = MeshRenderer::new(VertexKind::Colored);
        assert_eq!(r.tint, Color::WHITE);
    }
}

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // clip space
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Corner positions of the quad; the index buffer assembles two triangles.
const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-0.5, -0.5] },
    QuadVertex { pos: [0.5, -0.5] },
    QuadVertex { pos: [0.5, 0.5] },
    QuadVertex { pos: [-0.5, 0.5] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

// ── color uniform ─────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ColorUniform {
    color: [f32; 4],
}

/// Returns the `wgpu` minimum binding size for the color uniform buffer.
///
/// `ColorUniform` is one `[f32; 4]` (16 bytes) so its size is always
/// non-zero.
fn color_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ColorUniform>() as u64)
        .expect("ColorUniform has non-zero size by construction")
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Uniform-colored quad renderer.
///
/// Holds the vertex/fragment source strings recovered from a shader bundle
/// and builds its pipeline lazily on first use (rebuilt if the surface format
/// changes). The static quad geometry is uploaded once, before the first draw;
/// only the color uniform is written per frame.
pub struct QuadRenderer {
    vertex_src: String,
    fragment_src: String,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    color_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
}

impl QuadRenderer {
    /// Creates a renderer from the two shader stage sources (WGSL).
    ///
    /// The vertex source must export `vs_main`, the fragment source `fs_main`
    /// with a `u_color` uniform at group 0, binding 0.
    pub fn new(vertex_src: impl Into<String>, fragment_src: impl Into<String>) -> Self {
        Self {
            vertex_src: vertex_src.into(),
            fragment_src: fragment_src.into(),
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            color_ubo: None,
            quad_vbo: None,
            quad_ibo: None,
        }
    }

    /// Draws the quad into `target` with the given fill color.
    ///
    /// Issues exactly one indexed draw call (6 indices, two triangles).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, color: Color) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        self.write_color_uniform(ctx, color);

        // Immutable borrows after all mutating setup.
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("chroma quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let vs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("chroma quad vs"),
            source: wgpu::ShaderSource::Wgsl(self.vertex_src.as_str().into()),
        });

        let fs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("chroma quad fs"),
            source: wgpu::ShaderSource::Wgsl(self.fragment_src.as_str().into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("chroma quad bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(color_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("chroma quad pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    // Newer wgpu uses immediate constants; keep disabled.
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("chroma quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Opaque fill; no blending needed.
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.color_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.color_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let color_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("chroma quad color ubo"),
            size: std::mem::size_of::<ColorUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("chroma quad bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_ubo.as_entire_binding(),
            }],
        });

        self.color_ubo = Some(color_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("chroma quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("chroma quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_color_uniform(&mut self, ctx: &RenderCtx<'_>, color: Color) {
        let Some(ubo) = self.color_ubo.as_ref() else { return };
        let c = color.clamped();
        let u = ColorUniform { color: c.to_array() };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

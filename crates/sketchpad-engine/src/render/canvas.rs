use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Viewport};
use crate::render::{RenderCtx, RenderTarget};

use super::{DrawBatch, GeometryRecorder, Primitive};

/// GPU renderer for a [`GeometryRecorder`].
///
/// Every recorded batch is flattened into one triangle list:
/// - `Triangles` pass through
/// - `TriangleFan` expands to `count - 2` triangles around vertex 0
/// - `Points` become axis-aligned quads `point_size` logical pixels across
///
/// The vertex buffer is rebuilt only when the recorder's generation or the viewport
/// changes, so an idle canvas costs one draw call per frame.
#[derive(Default)]
pub struct CanvasRenderer {
    label: &'static str,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    vertices: Vec<CanvasVertex>,
    uploaded: Option<(u64, Viewport)>,
}

impl CanvasRenderer {
    /// `label` prefixes wgpu debug labels (e.g. "scene", "overlay").
    pub fn new(label: &'static str) -> Self {
        Self { label, ..Self::default() }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        recorder: &GeometryRecorder,
    ) {
        self.ensure_pipeline(ctx);

        let stamp = (recorder.generation(), ctx.viewport);
        if self.uploaded != Some(stamp) {
            self.vertices.clear();
            tessellate(recorder.batches(), ctx.viewport, &mut self.vertices);

            if !self.vertices.is_empty() {
                self.ensure_vertex_capacity(ctx, self.vertices.len());
                let Some(vbo) = self.vbo.as_ref() else { return };
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
            }
            self.uploaded = Some(stamp);
        }

        if self.vertices.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.label),
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
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("{}: building pipeline for {:?}", self.label, ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sketchpad canvas shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/canvas.wgsl").into()),
        });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("sketchpad canvas pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sketchpad canvas pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CanvasVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
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
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<CanvasVertex>()) as u64;
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sketchpad canvas vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

/// Flattens recorded batches into triangle-list vertices, appending to `out`.
///
/// Point quads are sized against `viewport` so that `point_size` logical pixels cover
/// the same on-screen extent regardless of surface resolution.
pub(crate) fn tessellate(batches: &[DrawBatch], viewport: Viewport, out: &mut Vec<CanvasVertex>) {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);

    for batch in batches {
        let color = batch.color.to_array();
        let v = |p: Vec2| CanvasVertex { pos: p.to_array(), color };

        match batch.primitive {
            Primitive::Triangles => {
                let whole = batch.vertices.len() / 3 * 3;
                out.extend(batch.vertices[..whole].iter().copied().map(v));
            }
            Primitive::TriangleFan => {
                let Some((&hub, rim)) = batch.vertices.split_first() else { continue };
                for pair in rim.windows(2) {
                    out.extend([v(hub), v(pair[0]), v(pair[1])]);
                }
            }
            Primitive::Points => {
                if batch.point_size <= 0.0 {
                    continue;
                }
                // point_size px spans point_size * 2 / extent in NDC; half of that each side.
                let hx = batch.point_size / w;
                let hy = batch.point_size / h;
                for &c in &batch.vertices {
                    let tl = v(Vec2::new(c.x - hx, c.y + hy));
                    let tr = v(Vec2::new(c.x + hx, c.y + hy));
                    let br = v(Vec2::new(c.x + hx, c.y - hy));
                    let bl = v(Vec2::new(c.x - hx, c.y - hy));
                    out.extend([tl, bl, br, tl, br, tr]);
                }
            }
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  (NDC)
///  offset  8  color  [f32; 4]   loc 1  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct CanvasVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl CanvasVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CanvasVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

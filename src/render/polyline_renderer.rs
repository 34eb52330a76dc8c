//! Renderer fuer Linienzuege (Polygon-Umriss und Kurven-Polyline).

use super::mesh::push_polyline;
use super::types::{LineVertex, RenderContext, Uniforms};
use crate::core::DeviceSpace;
use eframe::{egui_wgpu, wgpu};
use glam::Vec2;

/// Renderer fuer einen Linienzug mit konfigurierbarer Breite und Farbe.
///
/// Wird zweimal instanziert: fuer den geschlossenen Polygon-Umriss und
/// die offene Kurven-Polyline. Jede Instanz besitzt Pipeline und Buffer.
pub struct PolylineRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer fuer Vertex-Daten (vermeidet per-Frame-Allokation)
    vertex_scratch: Vec<LineVertex>,
    label: &'static str,
}

impl PolylineRenderer {
    /// Erstellt einen neuen Polyline-Renderer.
    pub fn new(
        render_state: &egui_wgpu::RenderState,
        shader: &wgpu::ShaderModule,
        label: &'static str,
    ) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Polyline Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Polyline Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Polyline Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Polyline Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_line"),
                buffers: &[LineVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: true,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
            label,
        }
    }

    /// Rendert den Linienzug; `closed` schliesst ihn zum Umriss.
    ///
    /// Baut die Quad-Geometrie pro Frame neu auf und aktualisiert den
    /// Vertex-Buffer nur bei Kapazitaets-Wachstum.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        points: &[Vec2],
        closed: bool,
        width_px: f32,
        color: [f32; 4],
    ) {
        let viewport_width = ctx.viewport_size[0];
        let viewport_height = ctx.viewport_size[1];
        if !viewport_width.is_finite()
            || !viewport_height.is_finite()
            || viewport_width <= 0.0
            || viewport_height <= 0.0
        {
            return;
        }

        if points.len() < 2 {
            return;
        }

        let view_proj = super::types::build_view_projection(ctx.viewport_size);
        ctx.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                aa_params: [1.0, 0.0, 0.0, 0.0],
            }]),
        );

        // Linienbreite von Pixeln in Device-Einheiten umrechnen
        let thickness = width_px * DeviceSpace::new(ctx.viewport_size).device_per_pixel();

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        push_polyline(&mut vertices, points, closed, thickness, color);

        if vertices.is_empty() {
            self.vertex_scratch = vertices;
            return;
        }

        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let vertex_size = std::mem::size_of::<LineVertex>() as u64;
            let buffer_size = (vertices.len() as u64) * vertex_size;
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Polyline Vertex Buffer"),
                size: buffer_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            ctx.queue
                .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("{}: missing vertex buffer before draw call", self.label);
            self.vertex_scratch = vertices;
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertices.len() as u32, 0..1);

        self.vertex_scratch = vertices;
    }
}

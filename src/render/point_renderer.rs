//! Kontrollpunkt-Renderer mit GPU-Instancing.

use super::types::{PointInstance, RenderContext, Uniforms, Vertex};
use crate::core::DeviceSpace;
use eframe::{egui_wgpu, wgpu};
use glam::Vec2;
use wgpu::util::DeviceExt;

/// Renderer fuer Kontrollpunkte (instanzierte Kreise)
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: Option<wgpu::Buffer>,
    instance_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer fuer Instanzdaten (vermeidet per-Frame-Allokation)
    instance_scratch: Vec<PointInstance>,
}

impl PointRenderer {
    /// Erstellt einen neuen Punkt-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        // Uniform-Buffer erstellen
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Point Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Bind-Group-Layout
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Point Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        // Bind-Group erstellen
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Point Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Pipeline-Layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Render-Pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_point"),
                buffers: &[Vertex::desc(), PointInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_point"),
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

        // Vertex-Buffer fuer Quad (2 Dreiecke)
        let vertices = [
            Vertex {
                position: [-1.0, -1.0],
            },
            Vertex {
                position: [1.0, -1.0],
            },
            Vertex {
                position: [1.0, 1.0],
            },
            Vertex {
                position: [-1.0, -1.0],
            },
            Vertex {
                position: [1.0, 1.0],
            },
            Vertex {
                position: [-1.0, 1.0],
            },
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            bind_group,
            instance_buffer: None,
            instance_capacity: 0,
            instance_scratch: Vec::new(),
        }
    }

    /// Rendert alle Kontrollpunkte per GPU-Instancing.
    ///
    /// Der gezogene Punkt bekommt die Drag-Randfarbe und erscheint
    /// leicht vergroessert.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        control_points: &[Vec2],
        dragged_index: Option<usize>,
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

        // Punktgroesse von Pixeln in Device-Einheiten (Halb-Ausdehnung)
        let device_per_pixel = DeviceSpace::new(ctx.viewport_size).device_per_pixel();
        let base_size = 0.5 * ctx.options.point_size_px * device_per_pixel;

        // Instanzen aus den Kontrollpunkten sammeln
        let mut instances = std::mem::take(&mut self.instance_scratch);
        instances.clear();

        for (index, point) in control_points.iter().enumerate() {
            let is_dragged = dragged_index == Some(index);
            let base_color = ctx.options.point_color;
            // Randfarbe aussen — nur beim gezogenen Punkt anders
            let rim_color = if is_dragged {
                ctx.options.point_color_dragged
            } else {
                base_color
            };
            let size = if is_dragged {
                base_size * ctx.options.drag_size_factor
            } else {
                base_size
            };

            instances.push(PointInstance::new(
                [point.x, point.y],
                base_color,
                rim_color,
                size,
            ));
        }

        if instances.is_empty() {
            self.instance_scratch = instances;
            return;
        }

        // Uniform-Buffer aktualisieren
        let view_proj = super::types::build_view_projection(ctx.viewport_size);
        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            aa_params: [1.0, 0.0, 0.0, 0.0],
        };
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        // Instance-Buffer erstellen/aktualisieren (Reuse)
        if self.instance_buffer.is_none() || instances.len() > self.instance_capacity {
            let instance_size = std::mem::size_of::<PointInstance>() as u64;
            let buffer_size = (instances.len() as u64) * instance_size;
            self.instance_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Point Instance Buffer"),
                size: buffer_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = instances.len();
        }

        if let Some(instance_buffer) = &self.instance_buffer {
            ctx.queue
                .write_buffer(instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        // Rendern
        let Some(instance_buffer) = self.instance_buffer.as_ref() else {
            log::error!("PointRenderer: missing instance buffer before draw call");
            self.instance_scratch = instances;
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
        render_pass.draw(0..6, 0..instances.len() as u32);
        self.instance_scratch = instances;
    }
}

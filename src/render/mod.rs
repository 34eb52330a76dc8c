//! GPU-Rendering mit wgpu.

mod callback;
mod mesh;
mod point_renderer;
mod polyline_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use point_renderer::PointRenderer;
pub(crate) use polyline_renderer::PolylineRenderer;
use types::RenderContext;

use eframe::egui_wgpu;

/// Haupt-Renderer fuer Polygon, Kurve und Kontrollpunkte.
///
/// Dieser Renderer verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines)
/// und bietet eine saubere API: `new()` + `render_scene()`.
pub struct Renderer {
    polygon_renderer: PolylineRenderer,
    curve_renderer: PolylineRenderer,
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden — alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Editor Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        let polygon_renderer = PolylineRenderer::new(render_state, &shader, "Polygon Pipeline");
        let curve_renderer = PolylineRenderer::new(render_state, &shader, "Curve Pipeline");
        let point_renderer = PointRenderer::new(render_state, &shader);

        Self {
            polygon_renderer,
            curve_renderer,
            point_renderer,
        }
    }

    /// Rendert die komplette Szene
    ///
    /// Diese Methode nimmt nur Referenzen - keine Daten werden kopiert!
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        if !scene.has_geometry() {
            return;
        }

        // Gemeinsamer Kontext fuer alle Sub-Renderer
        let ctx = RenderContext {
            device,
            queue,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };

        // 1. Polygon-Umriss (geschlossen, zuunterst)
        self.polygon_renderer.render(
            &ctx,
            render_pass,
            &scene.control_points,
            true,
            scene.options.polygon_line_width_px,
            scene.options.polygon_color,
        );

        // 2. Kurven-Polyline (offen, darueber)
        self.curve_renderer.render(
            &ctx,
            render_pass,
            &scene.sampled_curve,
            false,
            scene.options.curve_line_width_px,
            scene.options.curve_color,
        );

        // 3. Kontrollpunkte (zuoberst)
        self.point_renderer.render(
            &ctx,
            render_pass,
            &scene.control_points,
            scene.dragged_index,
        );
    }
}

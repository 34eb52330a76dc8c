//! Rendering-Typen und Konfiguration.

use crate::shared::EditorOptions;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Gemeinsamer Kontext fuer alle Sub-Renderer.
///
/// Buendelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benoetigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device fuer Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue fuer Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Viewport-Groesse in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Editor-Optionen (Farben, Groessen, etc.)
    pub options: &'a EditorOptions,
}

/// Vertex fuer ein Quad (2D-Rechteck)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position im 2D-Raum
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout fuer wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertex fuer Linien-Geometrie (Polygonzug und Kurve).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    /// Position im Device-Raum
    pub position: [f32; 2],
    /// RGBA-Farbe der Linie
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Beschreibt das Vertex-Layout fuer wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Instanz-Daten fuer einen Kontrollpunkt
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointInstance {
    /// Position im Device-Raum
    pub position: [f32; 2],
    /// Basis-Farbe (Kern des Punkts)
    pub base_color: [f32; 4],
    /// Rand-Farbe (Aussenring / Drag-Markierung)
    pub rim_color: [f32; 4],
    /// Halb-Ausdehnung des Punkt-Quads in Device-Einheiten
    pub size: f32,
    _padding: [f32; 1],
}

impl PointInstance {
    /// Erstellt eine neue Punkt-Instanz.
    pub fn new(position: [f32; 2], base_color: [f32; 4], rim_color: [f32; 4], size: f32) -> Self {
        Self {
            position,
            base_color,
            rim_color,
            size,
            _padding: [0.0; 1],
        }
    }

    /// Beschreibt das Instanz-Layout fuer wgpu (PointInstance).
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 10]>() as eframe::wgpu::BufferAddress,
                    shader_location: 4,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Buffer fuer View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// Anti-Aliasing-Parameter
    pub aa_params: [f32; 4],
}

/// Berechnet die View-Projection-Matrix fuer den 2D-Viewport.
///
/// Die Geometrie liegt bereits im Device-Raum [-1,1]² — die Abbildung ist
/// die Identitaet. Bleibt als zentrale Stelle des Abbildungsvertrags.
pub(crate) fn build_view_projection(_viewport_size: [f32; 2]) -> Mat4 {
    Mat4::IDENTITY
}

//! Rendering-Typen für die 3D-Szene.

use crate::core::Camera3D;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Gemeinsamer Kontext für Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter eines Frames.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Orbit-Kamera des Frames
    pub camera: &'a Camera3D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

/// Vertex der Szenen-Geometrie (Boxen und Boden-Bänder)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    /// Position in Welt-Koordinaten
    pub position: [f32; 3],
    /// Flächennormale (für Beleuchtung)
    pub normal: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl SceneVertex {
    /// Erstellt einen neuen SceneVertex.
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion und Licht
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// Lichtrichtung (xyz, zur Lichtquelle) und Umgebungsanteil (w)
    pub light: [f32; 4],
}

/// Richtung zur Lichtquelle (schräg von oben).
pub(crate) const LIGHT_DIRECTION: Vec3 = Vec3::new(0.4, 1.0, 0.6);
/// Umgebungslicht-Anteil, damit abgewandte Flächen nicht schwarz werden.
pub(crate) const AMBIENT: f32 = 0.45;

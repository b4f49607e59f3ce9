//! GPU-Rendering mit wgpu.

mod callback;
mod scene_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use scene_renderer::SceneRenderer;
pub use types::{SceneVertex, Uniforms};
use types::RenderContext;

use eframe::egui_wgpu;

/// Haupt-Renderer für den Grundriss.
///
/// Verwaltet eigenen GPU-Zustand (Buffer, Pipeline) mit der API
/// `new()` + `render_scene()`.
pub struct Renderer {
    scene_renderer: SceneRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Floorplan Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            scene_renderer: SceneRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
        };

        self.scene_renderer.render(&ctx, render_pass, scene);
    }
}

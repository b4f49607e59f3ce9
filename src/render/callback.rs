//! Paint-Callback, über den egui die Grundriss-Szene in seinen Render-Pass zeichnen lässt.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Schnappschuss eines Frames: Marker, Segmente oder Wände samt Kamera.
pub struct WgpuRenderData {
    /// Vom Controller gebaute Szene (unveränderlich bis zum nächsten Frame)
    pub scene: RenderScene,
}

/// Zeichnet die Grundriss-Szene innerhalb des Viewport-Rechtecks.
///
/// egui verlangt `Send + Sync` für Callbacks; der Renderer liegt daher hinter einem Mutex.
pub struct WgpuRenderCallback {
    /// Szenen-Renderer mit Pipeline und wachsendem Vertex-Buffer
    pub renderer: Arc<Mutex<Renderer>>,
    pub render_data: WgpuRenderData,
    /// Für Uniform- und Vertex-Uploads im Paint-Schritt
    pub device: eframe::wgpu::Device,
    pub queue: eframe::wgpu::Queue,
}

impl eframe::egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        _queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Grundriss-Frame übersprungen: Renderer-Mutex vergiftet");
            return;
        };
        renderer.render_scene(
            &self.device,
            &self.queue,
            render_pass,
            &self.render_data.scene,
        );
    }
}

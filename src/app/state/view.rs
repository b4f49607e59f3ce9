use crate::core::Camera3D;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Orbit-Kamera für die Ansicht
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel (jeden Frame aktualisiert)
    pub viewport_size: Vec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera3D::new(),
            viewport_size: Vec2::ZERO,
        }
    }
}

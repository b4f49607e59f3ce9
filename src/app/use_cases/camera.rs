//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::Camera3D;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera3D::default();
}

/// Zoomt mit Faktor innerhalb der konfigurierten Abstandsgrenzen.
pub fn zoom(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_distance_min,
        state.options.camera_distance_max,
    );
}

/// Verschiebt das Kamera-Ziel auf der Bodenebene.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Dreht die Kamera um ihr Ziel.
pub fn orbit(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    state.view.camera.orbit(delta_yaw, delta_pitch);
}

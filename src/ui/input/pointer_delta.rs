//! Pointer-Delta-Verarbeitung: Kamera-Pan (Mitteltaste) und Orbit (Rechtsdrag).

use super::{local_screen_pos, screen_pos_to_ground, InputState, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas während aktiver Drags.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Middle) {
            let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
                return;
            };
            let current = local_screen_pos(pointer_pos, ctx.response);
            let previous = current - Vec2::new(pointer_delta.x, pointer_delta.y);

            // Der gegriffene Bodenpunkt bleibt unter dem Mauszeiger
            let grabbed = screen_pos_to_ground(previous, ctx.viewport_size, ctx.camera);
            let now = screen_pos_to_ground(current, ctx.viewport_size, ctx.camera);
            if let Some((grabbed, now)) = grabbed.zip(now) {
                let delta = grabbed - now;
                events.push(AppIntent::CameraPan {
                    delta: Vec2::new(delta.x, delta.z),
                });
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Secondary) {
            let sensitivity = ctx.options.camera_orbit_sensitivity;
            events.push(AppIntent::CameraOrbit {
                delta_yaw: -pointer_delta.x * sensitivity,
                delta_pitch: pointer_delta.y * sensitivity,
            });
        }
    }
}

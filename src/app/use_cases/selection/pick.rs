//! Use-Case: Bildschirm-Position per Raycast auflösen.
//!
//! Normalisiert wird immer gegen die aktuelle Viewport-Größe im State.

use crate::app::{render_scene, AppState};
use crate::core::PointId;
use glam::{Vec2, Vec3};

/// Punkt unter der Bildschirm-Position (nächster getroffener Marker).
///
/// Getestet wird gegen die Marker der aktuellen Render-Szene; die
/// Auflösung Handle → Punkt-ID läuft über deren Pick-Tabelle.
pub fn point_at_screen_pos(state: &AppState, screen_pos: Vec2) -> Option<PointId> {
    let ray = state
        .view
        .camera
        .screen_to_ray(screen_pos, state.view.viewport_size)?;
    let scene = render_scene::build(state, state.view.viewport_size);
    scene.pick_point(&ray)
}

/// Schnittpunkt des Bildschirm-Strahls mit der Bodenebene.
pub fn ground_at_screen_pos(state: &AppState, screen_pos: Vec2) -> Option<Vec3> {
    state
        .view
        .camera
        .screen_to_ray(screen_pos, state.view.viewport_size)?
        .intersect_ground_plane()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_with_viewport() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = Vec2::new(1280.0, 720.0);
        state
    }

    #[test]
    fn origin_marker_is_picked_at_its_screen_position() {
        let state = state_with_viewport();
        let screen = state
            .view
            .camera
            .world_to_screen(Vec3::new(0.0, 0.5, 0.0), state.view.viewport_size)
            .expect("Ursprung sichtbar");

        assert_eq!(point_at_screen_pos(&state, screen), Some(0));
    }

    #[test]
    fn empty_space_yields_none() {
        let state = state_with_viewport();
        let screen = state
            .view
            .camera
            .world_to_screen(Vec3::new(8.0, 0.0, 3.0), state.view.viewport_size)
            .expect("Position sichtbar");

        assert_eq!(point_at_screen_pos(&state, screen), None);
    }

    #[test]
    fn ground_position_roundtrips_through_screen() {
        let state = state_with_viewport();
        let world = Vec3::new(-4.0, 0.0, 2.0);
        let screen = state
            .view
            .camera
            .world_to_screen(world, state.view.viewport_size)
            .expect("Position sichtbar");

        let ground = ground_at_screen_pos(&state, screen).expect("Bodentreffer erwartet");

        assert_relative_eq!(ground.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(ground.z, world.z, epsilon = 1e-3);
    }

    #[test]
    fn zero_viewport_yields_no_hit() {
        let state = AppState::new();
        assert_eq!(point_at_screen_pos(&state, Vec2::new(10.0, 10.0)), None);
        assert!(ground_at_screen_pos(&state, Vec2::new(10.0, 10.0)).is_none());
    }
}

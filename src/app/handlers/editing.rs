//! Handler für Store-Mutationen am Grundriss.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;

/// Legt einen Punkt als Fortsetzung hinter `after_id` an.
pub fn add_point(state: &mut AppState, after_id: PointId, x: f32, z: f32) {
    use_cases::editing::add_point_after(state, after_id, x, z);
}

/// Verbindet zwei bestehende Punkte.
pub fn connect_points(state: &mut AppState, point_a: PointId, point_b: PointId) {
    use_cases::editing::connect_points(state, point_a, point_b);
}

/// Beginnt einen neuen Grundriss.
pub fn reset_floor_plan(state: &mut AppState) {
    use_cases::editing::reset_floor_plan(state);
}

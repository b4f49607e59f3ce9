//! Handler für Selektion, Cursor und Wandmodus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;

/// Selektiert einen Punkt.
pub fn select_point(state: &mut AppState, point_id: PointId) {
    use_cases::selection::select_point(state, point_id);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Aktualisiert die Cursor-Position auf der Bodenebene.
pub fn update_cursor(state: &mut AppState, ground_pos: glam::Vec3) {
    use_cases::interaction::update_cursor(state, ground_pos);
}

/// Schaltet den Wandmodus um.
pub fn toggle_walls(state: &mut AppState) {
    use_cases::interaction::toggle_walls(state);
}

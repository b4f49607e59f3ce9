//! Use-Case: Selektion setzen und aufheben.

use crate::app::AppState;
use crate::core::PointId;

/// Selektiert einen bestehenden Punkt (IDLE → SELECTED).
///
/// Unbekannte IDs werden ignoriert.
pub fn select_point(state: &mut AppState, point_id: PointId) {
    if state.floor_plan.point(point_id).is_none() {
        log::warn!("Punkt {} existiert nicht, Selektion unverändert", point_id);
        return;
    }
    state.interaction.selected_point_id = Some(point_id);
    log::debug!("Punkt {} selektiert", point_id);
}

/// Hebt die Selektion auf (SELECTED → IDLE).
pub fn clear_selection(state: &mut AppState) {
    state.interaction.selected_point_id = None;
}

//! Use-Case: Neuen Grundriss beginnen.

use crate::app::state::InteractionState;
use crate::app::AppState;
use crate::core::FloorPlan;
use std::sync::Arc;

/// Ersetzt den Grundriss durch einen mit Startpunkt im Ursprung und
/// setzt Selektion, Cursor und Wandmodus zurück.
pub fn reset_floor_plan(state: &mut AppState) {
    state.floor_plan = Arc::new(FloorPlan::with_origin());
    state.interaction = InteractionState::new();
    state.ui.status_message = None;
    log::info!("Neuer Grundriss angelegt");
}

//! Use-Case: Neuen Punkt hinter einem bestehenden Punkt anlegen.

use crate::app::AppState;
use crate::core::PointId;
use std::sync::Arc;

/// Legt einen Punkt bei (x, z) an und verbindet ihn mit `after_id`.
///
/// Abgelehnte Mutationen werden geloggt und in der Statuszeile gemeldet,
/// der Store bleibt dann unverändert.
pub fn add_point_after(state: &mut AppState, after_id: PointId, x: f32, z: f32) {
    let floor_plan = Arc::make_mut(&mut state.floor_plan);

    match floor_plan.add_point(after_id, x, z) {
        Ok(new_id) => {
            log::info!(
                "Punkt {} an Position ({:.2}, {:.2}) hinter Punkt {} hinzugefügt",
                new_id,
                x,
                z,
                after_id
            );
            state.ui.status_message = None;
        }
        Err(e) => {
            log::warn!("Punkt nicht hinzugefügt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

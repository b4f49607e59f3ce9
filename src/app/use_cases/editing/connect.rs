//! Use-Case: Zwei bestehende Punkte verbinden.

use crate::app::AppState;
use crate::core::PointId;
use std::sync::Arc;

/// Verbindet `point_a` mit `point_b`.
///
/// Self-Loops, Duplikate und unbekannte Punkte lehnt der Store ab;
/// die Ablehnung wird als Warnung geloggt.
pub fn connect_points(state: &mut AppState, point_a: PointId, point_b: PointId) {
    if let Err(e) = state.floor_plan.validate_connection(point_a, point_b) {
        log::warn!("Verbindung nicht möglich: {}", e);
        state.ui.status_message = Some(e.to_string());
        return;
    }

    let floor_plan = Arc::make_mut(&mut state.floor_plan);
    match floor_plan.connect_points(point_a, point_b) {
        Ok(line_id) => {
            log::info!(
                "Linie {} zwischen Punkt {} und {} erstellt",
                line_id,
                point_a,
                point_b
            );
            state.ui.status_message = None;
        }
        Err(e) => {
            log::warn!("Verbindung nicht möglich: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

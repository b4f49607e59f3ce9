//! Use-Case-Funktionen für den transienten Editor-Zustand.

use crate::app::AppState;

/// Schaltet zwischen Editiermodus und Wandmodus um.
///
/// Die Selektion bleibt erhalten; die Vorschau-Linie erscheint nur im Editiermodus.
pub fn toggle_walls(state: &mut AppState) {
    state.interaction.show_walls = !state.interaction.show_walls;
    log::info!(
        "Ansicht: {}",
        if state.interaction.show_walls {
            "Wände"
        } else {
            "Punkte"
        }
    );
}

/// Speichert die letzte Cursor-Position auf der Bodenebene.
pub fn update_cursor(state: &mut AppState, ground_pos: glam::Vec3) {
    state.interaction.cursor_position = Some(ground_pos);
}

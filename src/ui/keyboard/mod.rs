//! Keyboard-Shortcuts für den Viewport.
//!
//! Leertaste schaltet beim Loslassen zwischen Punkt- und Wandansicht um,
//! Escape hebt die Selektion auf.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder (z.B. Optionen-Dialog) behalten ihre Tasten
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, space_released, escape_pressed, key_n_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_released(egui::Key::Space),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::N),
        )
    });

    if space_released {
        events.push(AppIntent::ToggleWallsRequested);
    }

    if escape_pressed {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewFloorPlanRequested);
    }

    events
}

#[cfg(test)]
mod tests;

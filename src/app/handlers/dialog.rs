//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Ungültige Optionen (siehe `EditorOptions::validation_error`) werden verworfen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    if let Some(reason) = options.validation_error() {
        log::warn!("Optionen verworfen: {}", reason);
        state.ui.status_message = Some(format!("Optionen verworfen: {}", reason));
        return Ok(());
    }
    state.options = options;
    // Kamera-Abstand in die neuen Grenzen holen
    use_cases::camera::zoom(state, 1.0);
    persist_options(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    use_cases::camera::zoom(state, 1.0);
    persist_options(state)
}

fn persist_options(state: &AppState) -> anyhow::Result<()> {
    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => {
            log::debug!("Kein Optionen-Pfad gesetzt, Optionen nur im Speicher");
            Ok(())
        }
    }
}

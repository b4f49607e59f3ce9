//! Application State: zentrale Datenhaltung.

mod interaction;
mod view;

pub use interaction::InteractionState;
pub use view::ViewState;

use super::CommandLog;
use crate::core::FloorPlan;
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Letzte Statusmeldung (z.B. abgelehnte Verbindung)
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Grundriss (Store, Mutation nur über Command-Handler)
    pub floor_plan: Arc<FloorPlan>,
    /// View-State
    pub view: ViewState,
    /// Transienter Editor-Zustand (Selektion, Cursor, Wandmodus)
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Kamera)
    pub options: EditorOptions,
    /// Zieldatei für gespeicherte Optionen (`None`: nur im Speicher)
    pub options_path: Option<PathBuf>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Startpunkt im Ursprung
    pub fn new() -> Self {
        Self::with_floor_plan(FloorPlan::with_origin())
    }

    /// Erstellt einen App-State für einen vorhandenen Grundriss
    pub fn with_floor_plan(floor_plan: FloorPlan) -> Self {
        Self {
            floor_plan: Arc::new(floor_plan),
            view: ViewState::new(),
            interaction: InteractionState::new(),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            options_path: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.floor_plan.point_count()
    }

    /// Gibt die Anzahl der Linien zurück (für UI-Anzeige)
    pub fn line_count(&self) -> usize {
        self.floor_plan.line_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

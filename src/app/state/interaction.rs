use crate::core::PointId;
use glam::Vec3;

/// Transienter Editor-Zustand, wird nicht persistiert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Selektierter Punkt (None = IDLE)
    pub selected_point_id: Option<PointId>,
    /// Letzte Cursor-Position auf der Bodenebene
    pub cursor_position: Option<Vec3>,
    /// Wandmodus: Wände statt Punkte/Segmente
    pub show_walls: bool,
}

impl InteractionState {
    /// Erstellt den Startzustand (keine Selektion, Editiermodus).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade ein Punkt selektiert ist.
    pub fn has_selection(&self) -> bool {
        self.selected_point_id.is_some()
    }
}

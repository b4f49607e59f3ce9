//! Kante des Grundrisses zwischen zwei Eckpunkten.

use super::PointId;

/// Eindeutige ID einer Linie
pub type LineId = u64;

/// Linie zwischen zwei Punkten (ungerichtet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorLine {
    /// Linien-ID
    pub id: LineId,
    /// Start-Punkt
    pub from: PointId,
    /// End-Punkt
    pub to: PointId,
}

impl FloorLine {
    /// Erstellt eine neue Linie
    pub fn new(id: LineId, from: PointId, to: PointId) -> Self {
        Self { id, from, to }
    }

    /// Prüft ob die Linie genau diese zwei Punkte verbindet (Richtung egal)
    pub fn connects(&self, a: PointId, b: PointId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Prüft ob der Punkt ein Endpunkt der Linie ist
    pub fn touches(&self, point_id: PointId) -> bool {
        self.from == point_id || self.to == point_id
    }
}

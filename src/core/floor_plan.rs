//! Der FloorPlan-Store mit allen Punkten und Linien des Grundrisses.

use super::{FloorLine, FloorPlanError, FloorPoint, LineId, PointId};
use indexmap::IndexMap;

/// Container für den gesamten Grundriss.
///
/// Einzige Quelle der Wahrheit für persistente Graph-Daten. Mutationen laufen
/// ausschließlich über `add_point` und `connect_points`.
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    /// Alle Punkte in Einfügereihenfolge, indexiert nach ID
    points: IndexMap<PointId, FloorPoint>,
    /// Alle Linien in Einfügereihenfolge, indexiert nach ID
    lines: IndexMap<LineId, FloorLine>,
    next_point_id: PointId,
    next_line_id: LineId,
}

impl FloorPlan {
    /// Erstellt einen leeren Grundriss
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Grundriss mit einem Startpunkt im Ursprung.
    ///
    /// Ohne Punkt gibt es nichts zu selektieren, der Grundriss könnte per
    /// Klick nie wachsen.
    pub fn with_origin() -> Self {
        let mut plan = Self::new();
        plan.insert_point(0.0, 0.0);
        plan
    }

    /// Fügt einen freistehenden Punkt ohne Verbindung hinzu
    pub fn insert_point(&mut self, x: f32, z: f32) -> PointId {
        let id = self.next_point_id;
        self.next_point_id += 1;
        self.points.insert(id, FloorPoint::new(id, x, z));
        id
    }

    /// Fügt einen neuen Punkt als Fortsetzung des Linienzugs hinter `after_id` ein.
    ///
    /// Legt zusätzlich die Linie `after_id → neuer Punkt` an.
    pub fn add_point(&mut self, after_id: PointId, x: f32, z: f32) -> Result<PointId, FloorPlanError> {
        if !self.points.contains_key(&after_id) {
            return Err(FloorPlanError::UnknownPoint(after_id));
        }

        let new_id = self.insert_point(x, z);
        self.push_line(after_id, new_id);
        Ok(new_id)
    }

    /// Verbindet zwei bestehende Punkte.
    ///
    /// Lehnt Self-Loops und doppelte Kanten (in beiden Richtungen) ab.
    pub fn connect_points(&mut self, a: PointId, b: PointId) -> Result<LineId, FloorPlanError> {
        self.validate_connection(a, b)?;
        Ok(self.push_line(a, b))
    }

    /// Prüft ohne Mutation, ob `connect_points(a, b)` gelingen würde.
    pub fn validate_connection(&self, a: PointId, b: PointId) -> Result<(), FloorPlanError> {
        for id in [a, b] {
            if !self.points.contains_key(&id) {
                return Err(FloorPlanError::UnknownPoint(id));
            }
        }
        if a == b {
            return Err(FloorPlanError::SelfConnection(a));
        }
        if self.has_line_between(a, b) {
            return Err(FloorPlanError::DuplicateLine(a, b));
        }
        Ok(())
    }

    fn push_line(&mut self, from: PointId, to: PointId) -> LineId {
        let id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.insert(id, FloorLine::new(id, from, to));
        id
    }

    /// Prüft ob eine Linie zwischen den Punkten existiert (Richtung egal)
    pub fn has_line_between(&self, a: PointId, b: PointId) -> bool {
        self.lines.values().any(|line| line.connects(a, b))
    }

    /// Findet einen Punkt
    pub fn point(&self, id: PointId) -> Option<&FloorPoint> {
        self.points.get(&id)
    }

    /// Findet eine Linie
    pub fn line(&self, id: LineId) -> Option<&FloorLine> {
        self.lines.get(&id)
    }

    /// Iterator über alle Punkte (Einfügereihenfolge)
    pub fn points(&self) -> impl Iterator<Item = &FloorPoint> {
        self.points.values()
    }

    /// Iterator über alle Linien (Einfügereihenfolge)
    pub fn lines(&self) -> impl Iterator<Item = &FloorLine> {
        self.lines.values()
    }

    /// Löst beide Endpunkte einer Linie auf
    pub fn line_endpoints(&self, line: &FloorLine) -> Option<(&FloorPoint, &FloorPoint)> {
        Some((self.points.get(&line.from)?, self.points.get(&line.to)?))
    }

    /// Anzahl der Punkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Linien
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Gibt `true` zurück, wenn der Grundriss keine Punkte enthält
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Repräsentiert einen Eckpunkt des Grundrisses auf der Bodenebene.

use glam::Vec3;

/// Eindeutige ID eines Grundriss-Punkts
pub type PointId = u64;

/// Eckpunkt auf der Bodenebene (y = 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPoint {
    /// Punkt-ID
    pub id: PointId,
    /// X-Koordinate auf der Bodenebene
    pub x: f32,
    /// Z-Koordinate auf der Bodenebene
    pub z: f32,
}

impl FloorPoint {
    /// Erstellt einen neuen Punkt
    pub fn new(id: PointId, x: f32, z: f32) -> Self {
        Self { id, x, z }
    }

    /// Position als 3D-Vektor auf der Bodenebene
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}

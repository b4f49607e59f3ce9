//! Core-Domänentypen: Punkte, Linien, FloorPlan-Store, Kamera, Raycasting.

pub mod camera;
pub mod error;
/// Datenmodell des Grundrisses
///
/// - FloorPlan: Store für alle Punkte und Linien
/// - FloorPoint: Eckpunkt auf der Bodenebene
/// - FloorLine: Kante zwischen zwei Eckpunkten
pub mod floor_plan;
pub mod line;
pub mod point;
pub mod ray;
pub mod snap;

pub use camera::Camera3D;
pub use error::FloorPlanError;
pub use floor_plan::FloorPlan;
pub use line::{FloorLine, LineId};
pub use point::{FloorPoint, PointId};
pub use ray::Ray;
pub use snap::{snap_point, snap_to_axis};

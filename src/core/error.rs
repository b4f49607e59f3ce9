//! Fehlertypen für Mutationen am FloorPlan-Store.

use super::PointId;
use thiserror::Error;

/// Abgelehnte Mutation am FloorPlan. Der Store bleibt in jedem Fall unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorPlanError {
    #[error("Punkt {0} existiert nicht")]
    UnknownPoint(PointId),

    #[error("Punkt {0} kann nicht mit sich selbst verbunden werden")]
    SelfConnection(PointId),

    #[error("Linie zwischen Punkt {0} und {1} existiert bereits")]
    DuplicateLine(PointId, PointId),
}

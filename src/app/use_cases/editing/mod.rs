//! Use-Case-Funktionen für Grundriss-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_point`: Punkt als Fortsetzung des Linienzugs anlegen
//! - `connect`: Zwei bestehende Punkte verbinden
//! - `reset`: Neuen Grundriss beginnen

mod add_point;
mod connect;
mod reset;

pub use add_point::add_point_after;
pub use connect::connect_points;
pub use reset::reset_floor_plan;

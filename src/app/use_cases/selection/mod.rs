//! Use-Case-Funktionen für Punkt-Selektion.
//!
//! - `pick`: Raycast vom Bildschirm gegen Marker und Bodenebene
//! - `select`: Selektionszustand setzen und aufheben

mod pick;
mod select;

pub use pick::{ground_at_screen_pos, point_at_screen_pos};
pub use select::{clear_selection, select_point};

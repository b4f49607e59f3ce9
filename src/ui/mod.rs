//! UI-Komponenten: Menü, Status-Bar, Optionen, Input-Handling.

pub mod input;
mod keyboard;
mod labels;
/// UI-Layer mit egui
///
/// Menü, Status-Bar und Dialoge erzeugen nur `AppIntent`s; der Zustand
/// wird ausschließlich über den Controller verändert.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::{InputState, ListenerGuard, ListenerKind, ListenerRegistry};
pub use labels::paint_point_labels;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;

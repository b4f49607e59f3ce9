//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Raycasts normalisieren immer gegen diesen Wert, deshalb muss er vor
/// jedem anderen Viewport-Intent eines Frames gesetzt werden.
pub fn resize(state: &mut AppState, size: glam::Vec2) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, glam::Vec2::new(1920.0, 1080.0));

        assert_eq!(state.view.viewport_size, glam::Vec2::new(1920.0, 1080.0));
    }
}

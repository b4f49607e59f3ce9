//! Klick- und Mausbewegungs-Events: liefern Viewport-lokale Bildschirmpositionen.

use super::{local_screen_pos, InputState, ListenerKind, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet die aktuelle Hover-Position für Cursor und Vorschau.
    pub(crate) fn handle_pointer_move(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !self.is_listening(ListenerKind::PointerMove) {
            return;
        }

        let moved = ctx.ui.input(|i| i.pointer.is_moving());
        if !moved {
            return;
        }

        if let Some(pointer_pos) = ctx.response.hover_pos() {
            events.push(AppIntent::PointerMoved {
                screen_pos: local_screen_pos(pointer_pos, ctx.response),
            });
        }
    }

    /// Verarbeitet Primärklicks im Viewport.
    pub(crate) fn handle_clicks(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !self.is_listening(ListenerKind::Click) {
            return;
        }

        if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::ViewportClicked {
                    screen_pos: local_screen_pos(pointer_pos, ctx.response),
                });
            }
        }
    }
}

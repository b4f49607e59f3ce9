//! Viewport-Input-Handling: Maus-Events, Tasten, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `listeners`: Scoped Listener mit Guard-basierter Abmeldung
//! - `clicks`: Primärklick und Mausbewegung (Picking-Eingaben)
//! - `pointer_delta`: Kamera-Pan und -Orbit während aktiver Drags
//! - `zoom`: Scroll-Zoom

mod clicks;
pub mod listeners;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::Camera3D;
use crate::shared::EditorOptions;
use glam::Vec2;

pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry};

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: Vec2,
    pub camera: &'a Camera3D,
    pub options: &'a EditorOptions,
}

/// Input-Zustand des Viewports.
///
/// Hält je Event-Art einen Listener-Guard. Wird der Zustand gedroppt,
/// sind alle Listener abgemeldet.
pub struct InputState {
    registry: ListenerRegistry,
    _guards: Vec<ListenerGuard>,
}

impl InputState {
    /// Meldet Klick-, Mausbewegungs- und KeyUp-Listener an.
    pub fn new(registry: &ListenerRegistry) -> Self {
        let guards = [
            ListenerKind::Click,
            ListenerKind::PointerMove,
            ListenerKind::KeyUp,
        ]
        .into_iter()
        .map(|kind| registry.subscribe(kind))
        .collect();

        Self {
            registry: registry.clone(),
            _guards: guards,
        }
    }

    /// Gibt an, ob Events dieser Art weitergeleitet werden.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.registry.is_listening(kind)
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge: Viewport-Größe, Tasten, Mausbewegung, Klick, Drags, Scroll.
    pub fn collect_viewport_events(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: Vec2,
        camera: &Camera3D,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        if self.is_listening(ListenerKind::KeyUp) {
            events.extend(keyboard::collect_keyboard_intents(ui));
        }

        self.handle_pointer_move(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine absolute egui-Position in Viewport-lokale Pixel um.
pub(crate) fn local_screen_pos(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}

/// Schneidet den Sichtstrahl durch eine Viewport-Position mit der Bodenebene.
pub(crate) fn screen_pos_to_ground(
    screen_pos: Vec2,
    viewport_size: Vec2,
    camera: &Camera3D,
) -> Option<glam::Vec3> {
    camera
        .screen_to_ray(screen_pos, viewport_size)?
        .intersect_ground_plane()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_state_holds_one_listener_per_kind() {
        let registry = ListenerRegistry::new();
        let input = InputState::new(&registry);

        assert_eq!(registry.active_count(), 3);
        assert!(input.is_listening(ListenerKind::Click));
        assert!(input.is_listening(ListenerKind::PointerMove));
        assert!(input.is_listening(ListenerKind::KeyUp));
    }

    #[test]
    fn dropping_input_state_releases_all_listeners() {
        let registry = ListenerRegistry::new();
        let input = InputState::new(&registry);
        drop(input);

        assert_eq!(registry.active_count(), 0);

        let _remounted = InputState::new(&registry);
        assert_eq!(registry.count(ListenerKind::KeyUp), 1);
    }

    #[test]
    fn ground_projection_of_viewport_center_hits_target() {
        let camera = Camera3D::new();
        let viewport = Vec2::new(800.0, 600.0);

        let ground = screen_pos_to_ground(viewport * 0.5, viewport, &camera)
            .expect("Bildmitte sollte den Boden treffen");

        assert!(ground.distance(camera.target) < 1e-2);
    }
}

//! Punkt-Beschriftungen als egui-Overlay über dem 3D-Viewport.

use crate::app::AppState;

/// Zeichnet die Punkt-IDs über die Marker, falls in den Optionen aktiviert.
pub fn paint_point_labels(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    if !state.options.show_point_labels || state.interaction.show_walls {
        return;
    }

    let viewport_size = glam::Vec2::new(rect.width(), rect.height());
    let lift = glam::Vec3::Y * state.options.marker_size_world;
    let painter = ui.painter_at(rect);

    for point in state.floor_plan.points() {
        let Some(screen) = state
            .view
            .camera
            .world_to_screen(point.position() + lift, viewport_size)
        else {
            continue;
        };

        painter.text(
            rect.min + egui::vec2(screen.x, screen.y),
            egui::Align2::CENTER_BOTTOM,
            point.id.to_string(),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
}

//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} | Linien: {}",
                state.point_count(),
                state.line_count()
            ));

            ui.separator();

            let mode = if state.interaction.show_walls {
                "Wände"
            } else {
                "Punkte bearbeiten"
            };
            ui.label(format!("Modus: {}", mode));

            ui.separator();

            match state.interaction.selected_point_id {
                Some(id) => ui.label(format!("Selektiert: Punkt {}", id)),
                None => ui.label("Selektiert: keine"),
            };

            if let Some(cursor) = state.interaction.cursor_position {
                ui.separator();
                ui.label(format!("Cursor: ({:.2}, {:.2})", cursor.x, cursor.z));
            }

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Abstand: {:.1} | Ziel: ({:.1}, {:.1})",
                camera.distance, camera.target.x, camera.target.z
            ));

            // Statusnachricht (z.B. abgelehnte Verbindung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

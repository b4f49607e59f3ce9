//! Optionen-Dialog für Farben, Größen und Kamera.

use crate::app::{AppIntent, AppState};
use std::ops::RangeInclusive;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Punkte ──────────────────────────────────────
                    ui.collapsing("Punkte", |ui| {
                        changed |= drag_value(
                            ui,
                            "Größe (Welt):",
                            &mut opts.marker_size_world,
                            0.1..=5.0,
                            0.01,
                        );
                        changed |= color_edit(ui, "Farbe:", &mut opts.marker_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.marker_color_selected);
                        changed |= ui
                            .checkbox(&mut opts.show_point_labels, "IDs anzeigen")
                            .changed();
                    });

                    // ── Linien ──────────────────────────────────────
                    ui.collapsing("Linien", |ui| {
                        changed |= drag_value(
                            ui,
                            "Breite:",
                            &mut opts.segment_width_world,
                            0.01..=2.0,
                            0.01,
                        );
                        changed |= color_edit(ui, "Farbe:", &mut opts.segment_color);
                        changed |= color_edit(ui, "Vorschau:", &mut opts.preview_color);
                    });

                    // ── Wände ───────────────────────────────────────
                    ui.collapsing("Wände", |ui| {
                        changed |= drag_value(
                            ui,
                            "Höhe:",
                            &mut opts.wall_height_world,
                            0.1..=20.0,
                            0.05,
                        );
                        changed |= drag_value(
                            ui,
                            "Stärke:",
                            &mut opts.wall_thickness_world,
                            0.01..=2.0,
                            0.01,
                        );
                        changed |= color_edit(ui, "Farbe:", &mut opts.wall_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        changed |= drag_value(
                            ui,
                            "Zoom-Schritt (Menü):",
                            &mut opts.camera_zoom_step,
                            1.01..=3.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Zoom-Schritt (Scroll):",
                            &mut opts.camera_scroll_zoom_step,
                            1.01..=2.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Orbit (rad/px):",
                            &mut opts.camera_orbit_sensitivity,
                            0.001..=0.1,
                            0.001,
                        );
                        changed |= drag_value(
                            ui,
                            "Min. Abstand:",
                            &mut opts.camera_distance_min,
                            0.5..=50.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Max. Abstand:",
                            &mut opts.camera_distance_max,
                            50.0..=5000.0,
                            1.0,
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Beschriftetes Zahlenfeld in einer Zeile.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}

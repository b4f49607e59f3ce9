//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Enthält die Selektions-Zustandsmaschine des Editors:
//!
//! | Selektion | Klickziel      | Commands                                  |
//! |-----------|----------------|-------------------------------------------|
//! | keine     | Punkt `id`     | `SelectPoint`                             |
//! | keine     | leer           | (nichts)                                  |
//! | `sel`     | Punkt `id`     | `ConnectPoints(id, sel)`, `ClearSelection` |
//! | `sel`     | leer           | `AddPoint(sel, eingerastet)`, `ClearSelection` |
//!
//! Im Wandmodus erzeugen Klicks keine Commands.

use super::use_cases::selection::{ground_at_screen_pos, point_at_screen_pos};
use super::{AppCommand, AppIntent, AppState};
use crate::core::snap_point;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerMoved { screen_pos } => {
            if state.interaction.show_walls {
                return Vec::new();
            }
            ground_at_screen_pos(state, screen_pos)
                .map(|ground_pos| vec![AppCommand::UpdateCursor { ground_pos }])
                .unwrap_or_default()
        }
        AppIntent::ViewportClicked { screen_pos } => map_click(state, screen_pos),
        AppIntent::ToggleWallsRequested => vec![AppCommand::ToggleWalls],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::CameraOrbit {
            delta_yaw,
            delta_pitch,
        } => vec![AppCommand::OrbitCamera {
            delta_yaw,
            delta_pitch,
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.camera_zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            factor: 1.0 / state.options.camera_zoom_step,
        }],
        AppIntent::NewFloorPlanRequested => vec![AppCommand::ResetFloorPlan],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Klick im Viewport gemäß Selektions-Zustandsmaschine.
fn map_click(state: &AppState, screen_pos: glam::Vec2) -> Vec<AppCommand> {
    if state.interaction.show_walls {
        return Vec::new();
    }

    let clicked = point_at_screen_pos(state, screen_pos);

    match (state.interaction.selected_point_id, clicked) {
        (None, Some(point_id)) => vec![AppCommand::SelectPoint { point_id }],
        (None, None) => Vec::new(),
        (Some(selected), Some(point_id)) => vec![
            AppCommand::ConnectPoints {
                point_a: point_id,
                point_b: selected,
            },
            AppCommand::ClearSelection,
        ],
        (Some(selected), None) => {
            let cursor =
                ground_at_screen_pos(state, screen_pos).or(state.interaction.cursor_position);
            let anchor = state.floor_plan.point(selected);

            match anchor.zip(cursor) {
                Some((anchor, cursor)) => {
                    let target = snap_point(anchor.position(), cursor);
                    vec![
                        AppCommand::AddPoint {
                            after_id: selected,
                            x: target.x,
                            z: target.z,
                        },
                        AppCommand::ClearSelection,
                    ]
                }
                None => {
                    log::debug!("Klick ohne Bodenposition: Selektion wird nur aufgehoben");
                    vec![AppCommand::ClearSelection]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;

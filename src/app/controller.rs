//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::OrbitCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view::orbit(state, delta_yaw, delta_pitch),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Selektion & Modus ===
            AppCommand::UpdateCursor { ground_pos } => {
                handlers::selection::update_cursor(state, ground_pos)
            }
            AppCommand::SelectPoint { point_id } => {
                handlers::selection::select_point(state, point_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ToggleWalls => handlers::selection::toggle_walls(state),

            // === Store-Mutationen ===
            AppCommand::AddPoint { after_id, x, z } => {
                handlers::editing::add_point(state, after_id, x, z)
            }
            AppCommand::ConnectPoints { point_a, point_b } => {
                handlers::editing::connect_points(state, point_a, point_b)
            }
            AppCommand::ResetFloorPlan => handlers::editing::reset_floor_plan(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: glam::Vec2) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}

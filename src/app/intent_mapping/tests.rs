use crate::app::{AppCommand, AppIntent, AppState};
use glam::{Vec2, Vec3};

use super::map_intent_to_commands;

fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = Vec2::new(1280.0, 720.0);
    state
}

fn screen_of(state: &AppState, world: Vec3) -> Vec2 {
    state
        .view
        .camera
        .world_to_screen(world, state.view.viewport_size)
        .expect("Position sollte sichtbar sein")
}

#[test]
fn click_on_point_without_selection_selects_it() {
    let state = state_with_viewport();
    let screen = screen_of(&state, Vec3::new(0.0, 0.5, 0.0));

    let commands = map_intent_to_commands(&state, AppIntent::ViewportClicked { screen_pos: screen });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SelectPoint { point_id: 0 }));
}

#[test]
fn click_on_empty_space_without_selection_is_noop() {
    let state = state_with_viewport();
    let screen = screen_of(&state, Vec3::new(6.0, 0.0, 6.0));

    let commands = map_intent_to_commands(&state, AppIntent::ViewportClicked { screen_pos: screen });

    assert!(commands.is_empty());
}

#[test]
fn click_on_empty_space_with_selection_adds_snapped_point() {
    let mut state = state_with_viewport();
    state.interaction.selected_point_id = Some(0);
    let screen = screen_of(&state, Vec3::new(6.0, 0.0, 1.0));

    let commands = map_intent_to_commands(&state, AppIntent::ViewportClicked { screen_pos: screen });

    assert_eq!(commands.len(), 2);
    match commands[0] {
        AppCommand::AddPoint { after_id, x, z } => {
            assert_eq!(after_id, 0);
            assert!((x - 6.0).abs() < 1e-2, "x = {x}");
            assert_eq!(z, 0.0);
        }
        ref other => panic!("AddPoint erwartet, erhalten: {other:?}"),
    }
    assert!(matches!(commands[1], AppCommand::ClearSelection));
}

#[test]
fn toggle_and_escape_map_to_single_commands() {
    let state = AppState::new();

    let toggle = map_intent_to_commands(&state, AppIntent::ToggleWallsRequested);
    let escape = map_intent_to_commands(&state, AppIntent::ClearSelectionRequested);

    assert!(matches!(toggle.as_slice(), [AppCommand::ToggleWalls]));
    assert!(matches!(escape.as_slice(), [AppCommand::ClearSelection]));
}

#[test]
fn clicks_and_pointer_moves_are_ignored_in_wall_mode() {
    let mut state = state_with_viewport();
    state.interaction.show_walls = true;
    let screen = screen_of(&state, Vec3::new(0.0, 0.5, 0.0));

    assert!(map_intent_to_commands(&state, AppIntent::ViewportClicked { screen_pos: screen })
        .is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos: screen })
        .is_empty());
}

#[test]
fn pointer_move_updates_cursor_on_ground() {
    let state = state_with_viewport();
    let screen = screen_of(&state, Vec3::new(2.0, 0.0, -3.0));

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { screen_pos: screen });

    match commands.as_slice() {
        [AppCommand::UpdateCursor { ground_pos }] => {
            assert!((ground_pos.x - 2.0).abs() < 1e-2);
            assert!((ground_pos.z + 3.0).abs() < 1e-2);
        }
        other => panic!("UpdateCursor erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn pointer_move_without_viewport_yields_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(100.0, 100.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn zoom_in_and_out_use_configured_step() {
    let state = AppState::new();
    let step = state.options.camera_zoom_step;

    let zoom_in = map_intent_to_commands(&state, AppIntent::ZoomInRequested);
    let zoom_out = map_intent_to_commands(&state, AppIntent::ZoomOutRequested);

    assert!(matches!(zoom_in.as_slice(), [AppCommand::ZoomCamera { factor }] if *factor == step));
    assert!(
        matches!(zoom_out.as_slice(), [AppCommand::ZoomCamera { factor }] if (*factor - 1.0 / step).abs() < 1e-6)
    );
}

/// Flache Kamera: der obere Bildrand zeigt über den Horizont.
fn state_looking_at_horizon() -> AppState {
    let mut state = state_with_viewport();
    state.view.camera.pitch = crate::core::Camera3D::PITCH_MIN;
    state.interaction.selected_point_id = Some(0);
    state
}

const ABOVE_HORIZON: Vec2 = Vec2::new(640.0, 1.0);

#[test]
fn click_above_horizon_falls_back_to_last_cursor() {
    let mut state = state_looking_at_horizon();
    state.interaction.cursor_position = Some(Vec3::new(4.0, 0.0, 1.0));
    assert!(super::ground_at_screen_pos(&state, ABOVE_HORIZON).is_none());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            screen_pos: ABOVE_HORIZON,
        },
    );

    match commands.as_slice() {
        [AppCommand::AddPoint { after_id, x, z }, AppCommand::ClearSelection] => {
            assert_eq!(*after_id, 0);
            assert_eq!(*x, 4.0);
            assert_eq!(*z, 0.0);
        }
        other => panic!("AddPoint + ClearSelection erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn click_above_horizon_without_cursor_only_clears_selection() {
    let state = state_looking_at_horizon();
    assert!(super::ground_at_screen_pos(&state, ABOVE_HORIZON).is_none());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            screen_pos: ABOVE_HORIZON,
        },
    );

    assert!(matches!(commands.as_slice(), [AppCommand::ClearSelection]));
}

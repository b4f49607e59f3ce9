use super::*;

fn key_event(key: egui::Key, pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_events(key_events: Vec<egui::Event>) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    // Modifier-Zustand kommt aus RawInput, nicht aus dem Key-Event
    if let Some(egui::Event::Key { modifiers, .. }) = key_events.first() {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events = key_events;

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_space_release_toggles_walls() {
    let events = collect_with_key_events(vec![key_event(
        egui::Key::Space,
        false,
        egui::Modifiers::default(),
    )]);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleWallsRequested)));
}

#[test]
fn test_space_press_alone_does_not_toggle() {
    let events = collect_with_key_events(vec![key_event(
        egui::Key::Space,
        true,
        egui::Modifiers::default(),
    )]);

    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleWallsRequested)));
}

#[test]
fn test_escape_clears_selection() {
    let events = collect_with_key_events(vec![key_event(
        egui::Key::Escape,
        true,
        egui::Modifiers::default(),
    )]);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ClearSelectionRequested)));
}

#[test]
fn test_ctrl_n_requests_new_floor_plan() {
    let events = collect_with_key_events(vec![key_event(
        egui::Key::N,
        true,
        egui::Modifiers::COMMAND,
    )]);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::NewFloorPlanRequested)));
}

#[test]
fn test_plain_n_is_ignored() {
    let events = collect_with_key_events(vec![key_event(
        egui::Key::N,
        true,
        egui::Modifiers::default(),
    )]);

    assert!(events.is_empty());
}

use glam::Vec2;

use super::map_intent_to_commands;
use crate::app::state::DragState;
use crate::app::{AppCommand, AppIntent, AppState};

#[test]
fn primary_press_auf_punkt_startet_drag() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            device_pos: Vec2::new(-0.48, -0.52),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginDrag { index: 0 }));
}

#[test]
fn primary_press_im_leeren_raum_legt_punkt_an() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            device_pos: Vec2::new(0.0, 0.9),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::AddPoint { .. }));
}

#[test]
fn primary_press_bei_vollem_polygon_ist_noop() {
    let mut state = AppState::new();
    let max = state.options.max_points;
    for i in 0..4 {
        state.polygon.add_point(Vec2::new(0.8, i as f32 * 0.2), max);
    }
    assert_eq!(state.polygon.len(), 8);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            device_pos: Vec2::new(-0.8, 0.9),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn primary_press_auf_punkt_startet_drag_auch_bei_vollem_polygon() {
    let mut state = AppState::new();
    let max = state.options.max_points;
    for i in 0..4 {
        state.polygon.add_point(Vec2::new(0.8, i as f32 * 0.2), max);
    }

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            device_pos: Vec2::new(0.5, 0.5),
        },
    );

    assert!(matches!(commands[0], AppCommand::BeginDrag { index: 2 }));
}

#[test]
fn ueberlappende_punkte_erster_index_gewinnt() {
    let mut state = AppState::new();
    // Punkt 1 und 2 beide in Reichweite des Klicks, Punkt 2 naeher
    state.polygon.move_point(1, Vec2::new(0.05, 0.0));
    state.polygon.move_point(2, Vec2::new(0.01, 0.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            device_pos: Vec2::ZERO,
        },
    );

    assert!(matches!(commands[0], AppCommand::BeginDrag { index: 1 }));
}

#[test]
fn secondary_press_auf_punkt_entfernt_oberhalb_minimum() {
    let mut state = AppState::new();
    state
        .polygon
        .add_point(Vec2::new(0.0, 0.9), state.options.max_points);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            device_pos: Vec2::new(0.02, 0.88),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RemovePoint { index: 4 }));
}

#[test]
fn secondary_press_am_minimum_ist_noop() {
    let state = AppState::new();
    assert_eq!(state.polygon.len(), state.options.min_points);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            device_pos: Vec2::new(-0.5, -0.5),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn secondary_press_ohne_treffer_ist_noop() {
    let mut state = AppState::new();
    state
        .polygon
        .add_point(Vec2::new(0.0, 0.9), state.options.max_points);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            device_pos: Vec2::ZERO,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn secondary_press_waehrend_drag_ist_noop() {
    let mut state = AppState::new();
    state
        .polygon
        .add_point(Vec2::new(0.0, 0.9), state.options.max_points);
    state.editor.drag = DragState::Dragging { index: 0 };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            device_pos: Vec2::new(0.0, 0.9),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_moved_nur_waehrend_drag() {
    let mut state = AppState::new();

    let idle = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            device_pos: Vec2::new(0.3, 0.3),
        },
    );
    assert!(idle.is_empty());

    state.editor.drag = DragState::Dragging { index: 2 };
    let dragging = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            device_pos: Vec2::new(0.3, 0.3),
        },
    );
    assert!(matches!(dragging[0], AppCommand::DragPointTo { .. }));
}

#[test]
fn release_beendet_drag_sonst_noop() {
    let mut state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::PointerReleased).is_empty());

    state.editor.drag = DragState::Dragging { index: 0 };
    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);
    assert!(matches!(commands[0], AppCommand::EndDrag));
}

#[test]
fn exit_requested_mappt_auf_request_exit() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}

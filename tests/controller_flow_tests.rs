//! Integrationstests fuer Anwendungssteuerung: Exit, Viewport, Optionen.

use bezier_curve_editor::{AppController, AppIntent, AppState, EditorOptions};

#[test]
fn test_exit_requested_setzt_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}

#[test]
fn test_viewport_resized_aktualisiert_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 640.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.viewport_size, [800.0, 640.0]);
}

#[test]
fn test_options_dialog_flags() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(!state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_options_changed_tastet_kurve_neu_ab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.sampled_curve.len(), 101);

    let mut options = EditorOptions::default();
    options.curve_sample_count = 50;

    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    // Kurve wird mit dem neuen Sampling komplett ersetzt
    assert_eq!(state.sampled_curve.len(), 51);
    assert_eq!(state.options.curve_sample_count, 50);
}

#[test]
fn test_reset_options_stellt_defaults_wieder_her() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let mut options = EditorOptions::default();
    options.curve_sample_count = 10;
    options.max_points = 12;
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("ResetOptionsRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.options, EditorOptions::default());
    assert_eq!(state.sampled_curve.len(), 101);
}

//! Keyboard-Shortcuts fuer den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurueck.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_escape_pressed, key_r_pressed, modifiers) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::R),
            i.modifiers,
        )
    });

    // Escape beendet die Anwendung
    if key_escape_pressed {
        events.push(AppIntent::ExitRequested);
    }

    // Ctrl+R setzt das Polygon zurueck
    if modifiers.command && key_r_pressed {
        events.push(AppIntent::ResetPolygonRequested);
    }

    events
}

//! Handler fuer Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Oeffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schliesst den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Wendet neue Optionen an, tastet die Kurve neu ab und persistiert.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    // Sampling oder Grenzen koennen sich geaendert haben — neu abtasten ist billig
    state.recompute_curve();
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}

/// Setzt die Optionen auf Standardwerte zurueck.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

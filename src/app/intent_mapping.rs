//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier leben die Entscheidungen des Interaktions-Automaten: Hit-Test beim
//! Druecken, Kapazitaetsgrenzen beim Anlegen/Loeschen, Drag-Lifecycle.
//! Die resultierenden Commands sind bedingungslose Mutationen.

use super::state::DragState;
use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PrimaryPressed { device_pos } => {
            let radius = state.options.pick_radius_device;
            match state.polygon.hit_test(device_pos, radius) {
                // Treffer → Punkt am Mauszeiger aufnehmen
                Some(index) => vec![AppCommand::BeginDrag { index }],
                // Kein Treffer → neuen Punkt anlegen, solange Platz ist
                None if state.polygon.len() < state.options.max_points => {
                    vec![AppCommand::AddPoint { device_pos }]
                }
                // Kapazitaet erreicht → stiller No-op
                None => Vec::new(),
            }
        }

        // Loeschen nur aus dem Idle-Zustand — ein laufender Drag bindet den Zeiger
        AppIntent::SecondaryPressed { device_pos } if state.editor.drag == DragState::Idle => {
            let radius = state.options.pick_radius_device;
            match state.polygon.hit_test(device_pos, radius) {
                Some(index) if state.polygon.len() > state.options.min_points => {
                    vec![AppCommand::RemovePoint { index }]
                }
                // Kein Treffer oder Loesch-Schwelle erreicht → No-op
                _ => Vec::new(),
            }
        }
        AppIntent::SecondaryPressed { .. } => Vec::new(),

        AppIntent::PointerMoved { device_pos } => match state.editor.drag {
            DragState::Dragging { .. } => vec![AppCommand::DragPointTo { device_pos }],
            DragState::Idle => Vec::new(),
        },

        AppIntent::PointerReleased => match state.editor.drag {
            DragState::Dragging { .. } => vec![AppCommand::EndDrag],
            DragState::Idle => Vec::new(),
        },

        AppIntent::ResetPolygonRequested => vec![AppCommand::ResetPolygon],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;

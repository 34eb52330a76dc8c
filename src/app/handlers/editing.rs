//! Handler fuer Polygon-Editing: Punkte anlegen, loeschen, ziehen.

use crate::app::state::DragState;
use crate::app::AppState;

/// Haengt einen neuen Kontrollpunkt an und tastet die Kurve neu ab.
pub fn add_point(state: &mut AppState, device_pos: glam::Vec2) {
    let max_points = state.options.max_points;
    if state.polygon.add_point(device_pos, max_points) {
        state.recompute_curve();
        log::info!(
            "Kontrollpunkt angelegt bei ({:.3}, {:.3}), jetzt {} Punkte",
            device_pos.x,
            device_pos.y,
            state.polygon.len()
        );
    }
}

/// Entfernt den Kontrollpunkt an `index` und tastet die Kurve neu ab.
pub fn remove_point(state: &mut AppState, index: usize) {
    let min_points = state.options.min_points;
    if state.polygon.remove_point(index, min_points) {
        state.recompute_curve();
        log::info!(
            "Kontrollpunkt {} entfernt, noch {} Punkte",
            index,
            state.polygon.len()
        );
    }
}

/// Nimmt den Punkt an `index` in den Drag-Zustand auf.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if index < state.polygon.len() {
        state.editor.drag = DragState::Dragging { index };
        log::debug!("Drag gestartet auf Punkt {}", index);
    }
}

/// Setzt den gezogenen Punkt auf die neue Position und tastet die Kurve neu ab.
pub fn drag_point_to(state: &mut AppState, device_pos: glam::Vec2) {
    let DragState::Dragging { index } = state.editor.drag else {
        return;
    };
    if state.polygon.move_point(index, device_pos) {
        state.recompute_curve();
    }
}

/// Beendet den Drag und loescht den gezogenen Index.
pub fn end_drag(state: &mut AppState) {
    if state.is_dragging() {
        log::debug!("Drag beendet");
    }
    state.editor.drag = DragState::Idle;
}

/// Stellt das Start-Quadrat wieder her.
pub fn reset_polygon(state: &mut AppState) {
    state.polygon.reset();
    state.editor.drag = DragState::Idle;
    state.recompute_curve();
    log::info!("Polygon auf Start-Quadrat zurueckgesetzt");
}

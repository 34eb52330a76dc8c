//! Handler fuer Viewport-Zustand.

use crate::app::AppState;

/// Uebernimmt die aktuelle Viewport-Groesse in den View-State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

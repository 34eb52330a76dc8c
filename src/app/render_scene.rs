//! Builder fuer Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        control_points: state.polygon.points().to_vec(),
        sampled_curve: state.sampled_curve.clone(),
        dragged_index: state.editor.dragged_index(),
        viewport_size,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::DragState;
    use crate::app::AppState;

    #[test]
    fn build_uebernimmt_geometrie_und_dragzustand() {
        let mut state = AppState::new();
        state.editor.drag = DragState::Dragging { index: 2 };

        let scene = build(&state, [600.0, 600.0]);

        assert_eq!(scene.control_points.len(), 4);
        assert_eq!(scene.sampled_curve.len(), 101);
        assert_eq!(scene.dragged_index, Some(2));
        assert_eq!(scene.viewport_size, [600.0, 600.0]);
        assert!(scene.has_geometry());
    }

    #[test]
    fn build_teilt_kurve_ohne_kopie() {
        let state = AppState::new();
        let scene = build(&state, [600.0, 600.0]);
        assert!(std::sync::Arc::ptr_eq(
            &scene.sampled_curve,
            &state.sampled_curve
        ));
    }
}

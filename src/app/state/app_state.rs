use crate::core::{sample_curve, ControlPolygon};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{DragState, EditorState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das editierbare Kontrollpolygon
    pub polygon: ControlPolygon,
    /// Abgetastete Kurve; wird bei jeder Polygon-Mutation komplett ersetzt
    pub sampled_curve: Arc<Vec<glam::Vec2>>,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State (Drag-Automat)
    pub editor: EditorState,
    /// Laufzeit-Optionen (Grenzen, Sampling, Farben, Groessen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Start-Zustand: Einheitsquadrat plus abgetastete Kurve.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let polygon = ControlPolygon::new();
        let sampled_curve = Arc::new(sample_curve(polygon.points(), options.curve_sample_count));

        Self {
            polygon,
            sampled_curve,
            view: ViewState::new(),
            editor: EditorState::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Tastet die Kurve aus dem aktuellen Polygon neu ab.
    ///
    /// Eager und synchron bei jeder Mutation — bei ≤ 8 Punkten und
    /// ≤ 101 Samples ist das pro Event vernachlaessigbar.
    pub fn recompute_curve(&mut self) {
        self.sampled_curve = Arc::new(sample_curve(
            self.polygon.points(),
            self.options.curve_sample_count,
        ));
    }

    /// Gibt die Anzahl der Kontrollpunkte zurueck (fuer UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.polygon.len()
    }

    /// Gibt zurueck, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.editor.drag, DragState::Dragging { .. })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startzustand_hat_quadrat_und_kurve() {
        let state = AppState::new();
        assert_eq!(state.point_count(), 4);
        assert_eq!(state.sampled_curve.len(), state.options.curve_sample_count + 1);
        assert!(!state.is_dragging());
        assert!(!state.should_exit);
    }

    #[test]
    fn test_recompute_ersetzt_kurve_vollstaendig() {
        let mut state = AppState::new();
        let before = state.sampled_curve.clone();

        state.polygon.move_point(0, glam::Vec2::new(-0.9, -0.9));
        state.recompute_curve();

        // Alte Allokation bleibt unberuehrt, neue Kurve startet am neuen Punkt
        assert_eq!(before[0], glam::Vec2::new(-0.5, -0.5));
        assert_eq!(state.sampled_curve[0], glam::Vec2::new(-0.9, -0.9));
    }
}

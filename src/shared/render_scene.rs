//! Render-Szene als expliziter Uebergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Read-only Daten fuer einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Folgen-Reihenfolge (Device-Koordinaten)
    pub control_points: Vec<Vec2>,
    /// Abgetastete Kurven-Polyline (Arc: pro Frame geklont, nie kopiert)
    pub sampled_curve: Arc<Vec<Vec2>>,
    /// Index des gerade gezogenen Punkts (fuer Hervorhebung)
    pub dragged_index: Option<usize>,
    /// Viewport-Groesse in Pixeln [Breite, Hoehe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen fuer Farben, Groessen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurueck, ob Geometrie fuer Rendering vorhanden ist.
    pub fn has_geometry(&self) -> bool {
        !self.control_points.is_empty()
    }
}

//! Geteilte Typen fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhaengigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{POLYGON_MAX_POINTS, POLYGON_MIN_POINTS};
pub use render_scene::RenderScene;

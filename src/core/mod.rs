//! Core-Domaenentypen: Kontrollpolygon, Bezier-Abtastung, Viewport-Transformation.

pub mod bezier;
/// Core-Datenmodelle des Editors
///
/// Dieses Modul definiert die UI-freien Bausteine:
/// - ControlPolygon: geordnete Folge verschiebbarer Kontrollpunkte
/// - bezier: Bernstein-Basis und Kurven-Abtastung
/// - DeviceSpace: Pixel → Device-Raum-Normalisierung
pub mod control_polygon;
pub mod viewport;

pub use bezier::{bernstein, binomial, sample_curve};
pub use control_polygon::{ControlPolygon, DEFAULT_QUAD};
pub use viewport::DeviceSpace;

//! Zentrale Konfiguration fuer den Bezier Curve Editor.
//!
//! `EditorOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Polygon ─────────────────────────────────────────────────────────

/// Maximale Anzahl Kontrollpunkte; add ist oberhalb ein No-op.
pub const POLYGON_MAX_POINTS: usize = 8;
/// Minimale Anzahl Kontrollpunkte; remove ist am Minimum ein No-op.
/// Bewusst asymmetrisch zum Maximum — das Start-Quadrat bleibt immer erhalten.
pub const POLYGON_MIN_POINTS: usize = 4;

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Abtast-Segmente; die Kurve hat sample_count+1 Punkte.
pub const CURVE_SAMPLE_COUNT: usize = 100;

// ── Interaktion ─────────────────────────────────────────────────────

/// Hit-Test-Radius in Device-Einheiten ([-1,1]-Raum).
pub const PICK_RADIUS_DEVICE: f32 = 0.1;
/// Groessenfaktor fuer den gerade gezogenen Punkt.
pub const DRAG_SIZE_FACTOR: f32 = 1.5;

// ── Darstellung ─────────────────────────────────────────────────────

/// Punktdurchmesser in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Linienbreite des Polygonzugs in Pixeln.
pub const POLYGON_LINE_WIDTH_PX: f32 = 5.0;
/// Linienbreite der Kurve in Pixeln.
pub const CURVE_LINE_WIDTH_PX: f32 = 5.0;
/// Farbe der Kontrollpunkte (RGBA: Cyan).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des gezogenen Kontrollpunkts (RGBA: Magenta).
pub const POINT_COLOR_DRAGGED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe des Polygonzugs (RGBA: Gruen).
pub const POLYGON_COLOR: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe der Bezier-Kurve (RGBA: Orange).
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Hintergrundfarbe des Viewports (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Polygon ─────────────────────────────────────────────────
    /// Obergrenze der Kontrollpunkt-Anzahl
    pub max_points: usize,
    /// Untergrenze der Kontrollpunkt-Anzahl (Loesch-Schwelle)
    pub min_points: usize,

    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl der Abtast-Segmente (Kurve = sample_count+1 Punkte)
    pub curve_sample_count: usize,

    // ── Interaktion ─────────────────────────────────────────────
    /// Hit-Test-Radius in Device-Einheiten
    pub pick_radius_device: f32,
    /// Vergroesserungsfaktor fuer den gezogenen Punkt
    #[serde(default = "default_drag_size_factor")]
    pub drag_size_factor: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Punktdurchmesser in Pixeln
    pub point_size_px: f32,
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe des gezogenen Kontrollpunkts
    pub point_color_dragged: [f32; 4],
    /// Linienbreite des Polygonzugs in Pixeln
    pub polygon_line_width_px: f32,
    /// Farbe des Polygonzugs
    pub polygon_color: [f32; 4],
    /// Linienbreite der Kurve in Pixeln
    pub curve_line_width_px: f32,
    /// Farbe der Bezier-Kurve
    pub curve_color: [f32; 4],
    /// Hintergrundfarbe des Viewports
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_points: POLYGON_MAX_POINTS,
            min_points: POLYGON_MIN_POINTS,

            curve_sample_count: CURVE_SAMPLE_COUNT,

            pick_radius_device: PICK_RADIUS_DEVICE,
            drag_size_factor: DRAG_SIZE_FACTOR,

            point_size_px: POINT_SIZE_PX,
            point_color: POINT_COLOR,
            point_color_dragged: POINT_COLOR_DRAGGED,
            polygon_line_width_px: POLYGON_LINE_WIDTH_PX,
            polygon_color: POLYGON_COLOR,
            curve_line_width_px: CURVE_LINE_WIDTH_PX,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default fuer `background_color` (Abwaertskompatibilitaet bestehender TOML-Dateien).
fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

/// Serde-Default fuer `drag_size_factor` (Abwaertskompatibilitaet).
fn default_drag_size_factor() -> f32 {
    DRAG_SIZE_FACTOR
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sind_konsistent() {
        let opts = EditorOptions::default();
        assert!(opts.min_points < opts.max_points);
        assert_eq!(opts.max_points, 8);
        assert_eq!(opts.min_points, 4);
        assert_eq!(opts.curve_sample_count, 100);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = EditorOptions::default();
        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung darf nicht scheitern");
        let parsed: EditorOptions = toml::from_str(&toml_str).expect("Parse darf nicht scheitern");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_fehlende_felder_bekommen_default() {
        // background_color fehlt in aelteren Dateien → Serde-Default greift
        let toml_str = r#"
            max_points = 10
            min_points = 3
            curve_sample_count = 50
            pick_radius_device = 0.2
            point_size_px = 12.0
            point_color = [1.0, 1.0, 1.0, 1.0]
            point_color_dragged = [1.0, 0.0, 1.0, 1.0]
            polygon_line_width_px = 3.0
            polygon_color = [0.0, 1.0, 0.0, 1.0]
            curve_line_width_px = 3.0
            curve_color = [1.0, 0.5, 0.0, 1.0]
        "#;
        let parsed: EditorOptions = toml::from_str(toml_str).expect("Parse darf nicht scheitern");
        assert_eq!(parsed.max_points, 10);
        assert_eq!(parsed.background_color, BACKGROUND_COLOR);
    }
}

//! Das editierbare Kontrollpolygon: geordnete Punktfolge mit Hit-Test.

use glam::Vec2;

/// Start-Polygon: Einheitsquadrat um den Ursprung (Device-Koordinaten).
pub const DEFAULT_QUAD: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Geordnete, veraenderbare Folge von Kontrollpunkten.
///
/// Die Einfuege-Reihenfolge bestimmt die Polygon-Umlaufrichtung und die
/// Parametrisierung der Kurve. Kapazitaetsgrenzen (`max_points`,
/// `min_points`) kommen aus den `EditorOptions` und werden pro Aufruf
/// uebergeben — ungueltige Operationen sind stille No-ops.
#[derive(Debug, Clone)]
pub struct ControlPolygon {
    points: Vec<Vec2>,
}

impl ControlPolygon {
    /// Erstellt das Start-Polygon (Einheitsquadrat).
    pub fn new() -> Self {
        Self {
            points: DEFAULT_QUAD.to_vec(),
        }
    }

    /// Haengt einen Punkt ans Ende an, solange `len < max_points`.
    /// Gibt `true` zurueck wenn der Punkt aufgenommen wurde.
    pub fn add_point(&mut self, position: Vec2, max_points: usize) -> bool {
        if self.points.len() >= max_points {
            return false;
        }
        self.points.push(position);
        true
    }

    /// Entfernt den Punkt an `index`, solange `len > min_points`.
    /// Gibt `true` zurueck wenn ein Punkt entfernt wurde.
    pub fn remove_point(&mut self, index: usize, min_points: usize) -> bool {
        if self.points.len() <= min_points || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    /// Ueberschreibt die Position an `index` (waehrend eines Drags).
    pub fn move_point(&mut self, index: usize, new_position: Vec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        *point = new_position;
        true
    }

    /// Findet den ERSTEN Punkt mit quadrierter Distanz `< radius²` zu `query`.
    ///
    /// Linearer Scan in Folgen-Reihenfolge — bei ueberlappenden Treffern
    /// gewinnt der niedrigste Index, nicht der naechstgelegene Punkt.
    /// Diese Tie-Break-Regel ist Teil des Verhaltensvertrags.
    pub fn hit_test(&self, query: Vec2, radius: f32) -> Option<usize> {
        let radius_sq = radius * radius;
        self.points
            .iter()
            .position(|p| p.distance_squared(query) < radius_sq)
    }

    /// Setzt das Polygon auf das Start-Quadrat zurueck.
    pub fn reset(&mut self) {
        self.points.clear();
        self.points.extend_from_slice(&DEFAULT_QUAD);
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurueck wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ControlPolygon {
    fn default() -> Self {
        Self::new()
    }
}

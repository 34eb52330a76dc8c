//! Vertex-Generierung fuer Linienzuege (Polygon-Umriss und Kurve).

use super::types::LineVertex;
use glam::Vec2;

/// Erzeugt ein Quad (2 Dreiecke) fuer ein Liniensegment mit gegebener Breite.
pub(super) fn push_line_quad(
    vertices: &mut Vec<LineVertex>,
    start: Vec2,
    end: Vec2,
    thickness: f32,
    color: [f32; 4],
) {
    let dir = (end - start).normalize();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let v0 = start + perp;
    let v1 = start - perp;
    let v2 = end + perp;
    let v3 = end - perp;

    vertices.push(LineVertex::new([v0.x, v0.y], color));
    vertices.push(LineVertex::new([v1.x, v1.y], color));
    vertices.push(LineVertex::new([v2.x, v2.y], color));

    vertices.push(LineVertex::new([v2.x, v2.y], color));
    vertices.push(LineVertex::new([v1.x, v1.y], color));
    vertices.push(LineVertex::new([v3.x, v3.y], color));
}

/// Erzeugt Quads fuer einen kompletten Linienzug.
///
/// `closed` verbindet zusaetzlich den letzten mit dem ersten Punkt
/// (Polygon-Umriss). Degenerierte Segmente (Laenge ≈ 0) werden
/// uebersprungen, damit `normalize()` nie auf dem Nullvektor laeuft.
pub(super) fn push_polyline(
    vertices: &mut Vec<LineVertex>,
    points: &[Vec2],
    closed: bool,
    thickness: f32,
    color: [f32; 4],
) {
    if points.len() < 2 {
        return;
    }

    for window in points.windows(2) {
        if window[0].distance_squared(window[1]) < f32::EPSILON {
            continue;
        }
        push_line_quad(vertices, window[0], window[1], thickness, color);
    }

    if closed {
        let first = points[0];
        let last = points[points.len() - 1];
        if first.distance_squared(last) >= f32::EPSILON {
            push_line_quad(vertices, last, first, thickness, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_push_polyline_offen() {
        let points = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        let mut vertices = Vec::new();
        push_polyline(&mut vertices, &points, false, 0.1, WHITE);
        // 2 Segmente × 6 Vertices
        assert_eq!(vertices.len(), 12);
    }

    #[test]
    fn test_push_polyline_geschlossen() {
        let points = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        let mut vertices = Vec::new();
        push_polyline(&mut vertices, &points, true, 0.1, WHITE);
        // 3 Segmente inkl. Schlusskante
        assert_eq!(vertices.len(), 18);
    }

    #[test]
    fn test_degenerierte_segmente_werden_uebersprungen() {
        let points = [Vec2::ZERO, Vec2::ZERO, Vec2::new(1.0, 0.0)];
        let mut vertices = Vec::new();
        push_polyline(&mut vertices, &points, false, 0.1, WHITE);
        assert_eq!(vertices.len(), 6);
        assert!(vertices.iter().all(|v| v.position[0].is_finite()));
    }

    #[test]
    fn test_einzelpunkt_erzeugt_nichts() {
        let mut vertices = Vec::new();
        push_polyline(&mut vertices, &[Vec2::ZERO], true, 0.1, WHITE);
        assert!(vertices.is_empty());
    }
}

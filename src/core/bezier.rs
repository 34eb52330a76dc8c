//! Bezier-Abtastung ueber Bernstein-Basispolynome.
//!
//! Reine Geometrie-Funktionen ueber `&[Vec2]`, frei von UI- und
//! Render-Abhaengigkeiten.

use glam::Vec2;

/// Binomialkoeffizient C(n, r) in Gleitkomma-Arithmetik.
///
/// Iterative Produktformel; pro Schritt wird erst multipliziert und dann
/// dividiert (`result *= n-k+1; result /= k`), damit das Rundungsverhalten
/// reproduzierbar bleibt. Gleitkomma statt Integer, damit hoehere Grade
/// nicht ueberlaufen.
///
/// Symmetrie C(n, r) = C(n, n-r): fuer r > n/2 wird mit dem kleineren
/// Komplement gerechnet — ein einzelner Tausch statt Rekursion.
pub fn binomial(n: u32, r: u32) -> f64 {
    if r == 0 {
        return 1.0;
    }
    let r = if r > n / 2 { n - r } else { r };

    let mut result = 1.0f64;
    for k in 1..=r {
        result *= (n - k + 1) as f64;
        result /= k as f64;
    }
    result
}

/// Bernstein-Basispolynom vom Grad `degree`: C(n,i) · tⁱ · (1-t)^(n-i).
pub fn bernstein(degree: u32, i: u32, t: f32) -> f32 {
    let t = t as f64;
    (binomial(degree, i) * t.powi(i as i32) * (1.0 - t).powi((degree - i) as i32)) as f32
}

/// Tastet die Bezier-Kurve durch `control_points` dicht ab.
///
/// Liefert exakt `sample_count + 1` Punkte fuer t = i / sample_count,
/// i ∈ [0, sample_count]. Index-basiertes t statt akkumuliertem
/// Float-Schritt (`t += 1/samples`): Akkumulation kann am Rand t = 1.0
/// einen Punkt zu viel oder zu wenig liefern, die Index-Form ist
/// deterministisch und schliesst beide Endpunkte exakt ein.
///
/// Grad ist `len - 1`; ein einzelner Kontrollpunkt ergibt eine degenerierte
/// "Kurve" aus `sample_count + 1` identischen Punkten, eine leere Eingabe
/// eine leere Abtastung.
pub fn sample_curve(control_points: &[Vec2], sample_count: usize) -> Vec<Vec2> {
    if control_points.is_empty() {
        return Vec::new();
    }
    let degree = (control_points.len() - 1) as u32;

    let mut samples = Vec::with_capacity(sample_count + 1);
    for step in 0..=sample_count {
        let t = if sample_count == 0 {
            0.0
        } else {
            step as f32 / sample_count as f32
        };

        let mut point = Vec2::ZERO;
        for (i, control_point) in control_points.iter().enumerate() {
            point += bernstein(degree, i as u32, t) * *control_point;
        }
        samples.push(point);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_basisfaelle() {
        for n in 0..10 {
            assert_relative_eq!(binomial(n, 0), 1.0);
            assert_relative_eq!(binomial(n, n), 1.0);
        }
    }

    #[test]
    fn test_binomial_symmetrie() {
        for n in 1..12u32 {
            for r in 0..=n {
                assert_relative_eq!(binomial(n, r), binomial(n, n - r));
            }
        }
    }

    #[test]
    fn test_binomial_pascal_zeile() {
        // Zeile n=7: 1 7 21 35 35 21 7 1
        assert_relative_eq!(binomial(7, 1), 7.0);
        assert_relative_eq!(binomial(7, 2), 21.0);
        assert_relative_eq!(binomial(7, 3), 35.0);
        assert_relative_eq!(binomial(7, 4), 35.0);
    }

    #[test]
    fn test_bernstein_partition_der_eins() {
        // Die Basispolynome summieren sich fuer jedes t zu 1
        for degree in 0..8u32 {
            for step in 0..=10 {
                let t = step as f32 / 10.0;
                let sum: f32 = (0..=degree).map(|i| bernstein(degree, i, t)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_sample_curve_anzahl_und_endpunkte() {
        // Fuer alle Punktanzahlen 1..=8: genau sample_count+1 Samples,
        // erster/letzter Sample interpolieren die Endpunkte exakt
        for n in 1..=8usize {
            let points: Vec<Vec2> = (0..n)
                .map(|i| Vec2::new(i as f32 * 0.2 - 0.7, (i as f32 * 0.13).sin()))
                .collect();
            let samples = sample_curve(&points, 100);
            assert_eq!(samples.len(), 101);
            assert_eq!(samples[0], points[0]);
            assert_eq!(samples[100], points[n - 1]);
        }
    }

    #[test]
    fn test_sample_curve_einheitsquadrat() {
        let square = [
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ];
        let samples = sample_curve(&square, 100);
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], Vec2::new(-0.5, -0.5));
        assert_eq!(samples[100], Vec2::new(-0.5, 0.5));
        // Mitte der kubischen Kurve: B(0.5) = (P0 + 3·P1 + 3·P2 + P3) / 8
        assert_relative_eq!(samples[50].x, 0.25, epsilon = 1e-5);
        assert_relative_eq!(samples[50].y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sample_curve_einzelpunkt_degeneriert() {
        let single = [Vec2::new(0.3, -0.4)];
        let samples = sample_curve(&single, 100);
        assert_eq!(samples.len(), 101);
        assert!(samples.iter().all(|p| *p == single[0]));
    }

    #[test]
    fn test_sample_curve_leere_eingabe() {
        assert!(sample_curve(&[], 100).is_empty());
    }

    #[test]
    fn test_sample_curve_null_samples() {
        let samples = sample_curve(&[Vec2::ZERO, Vec2::ONE], 0);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0], Vec2::ZERO);
    }

    #[test]
    fn test_sample_curve_gerade_bleibt_gerade() {
        // Zwei Kontrollpunkte: lineare Interpolation
        let line = [Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)];
        let samples = sample_curve(&line, 4);
        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[2].x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(samples[2].y, 0.0, epsilon = 1e-6);
    }
}

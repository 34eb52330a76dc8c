//! Fenster-Pixel → Device-Raum-Normalisierung.

use glam::Vec2;

/// Abbildung von Fenster-Pixelkoordinaten in den Device-Raum [-1,1]².
///
/// Der gesamte Viewport wird auf das Quadrat [-1,1]×[-1,1] abgebildet
/// (y-Achse geflippt: Pixel-y waechst nach unten, Device-y nach oben).
/// Alle geometrischen Vergleiche des Editors finden im Device-Raum statt.
#[derive(Debug, Clone, Copy)]
pub struct DeviceSpace {
    size: Vec2,
}

impl DeviceSpace {
    /// Erstellt die Abbildung fuer die aktuelle Viewport-Groesse in Pixeln.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            // Division durch 0 bei minimierten Fenstern abfangen
            size: Vec2::new(viewport_size[0].max(1.0), viewport_size[1].max(1.0)),
        }
    }

    /// Rechnet eine Pixelposition in Device-Koordinaten um.
    ///
    /// x' = 2·x/w − 1, y' = 2·(h − y)/h − 1
    pub fn screen_to_device(&self, screen_pos: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * screen_pos.x / self.size.x - 1.0,
            2.0 * (self.size.y - screen_pos.y) / self.size.y - 1.0,
        )
    }

    /// Umrechnungsfaktor von Pixeln zu Device-Einheiten (vertikal).
    ///
    /// Groessen (Punktdurchmesser, Linienbreiten) sind in Pixeln
    /// konfiguriert und werden hiermit pro Frame umgerechnet.
    pub fn device_per_pixel(&self) -> f32 {
        2.0 / self.size.y
    }
}

use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Groesse hat sich geaendert
    ViewportResized { size: [f32; 2] },

    /// Primaere Maustaste gedrueckt (Position bereits in Device-Koordinaten)
    PrimaryPressed { device_pos: glam::Vec2 },
    /// Sekundaere Maustaste gedrueckt (Loeschen)
    SecondaryPressed { device_pos: glam::Vec2 },
    /// Maus bewegt waehrend die primaere Taste gehalten wird
    PointerMoved { device_pos: glam::Vec2 },
    /// Beliebige Maustaste losgelassen
    PointerReleased,

    /// Polygon auf das Start-Quadrat zuruecksetzen
    ResetPolygonRequested,

    /// Options-Dialog oeffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schliessen
    CloseOptionsDialogRequested,
    /// Optionen wurden geaendert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zuruecksetzen
    ResetOptionsRequested,
}

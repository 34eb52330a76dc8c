use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
///
/// Alle Vorbedingungen (Hit-Test, Kapazitaetsgrenzen, Drag-Zustand) sind
/// bereits im Intent-Mapping geprueft — Commands mutieren bedingungslos.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt an Device-Position anhaengen
    AddPoint { device_pos: glam::Vec2 },
    /// Kontrollpunkt an Index entfernen
    RemovePoint { index: usize },
    /// Drag auf einem getroffenen Punkt beginnen
    BeginDrag { index: usize },
    /// Gezogenen Punkt auf neue Device-Position setzen
    DragPointTo { device_pos: glam::Vec2 },
    /// Drag beenden (gezogener Index wird geloescht)
    EndDrag,
    /// Polygon auf das Start-Quadrat zuruecksetzen
    ResetPolygon,

    /// Viewport-Groesse uebernehmen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,

    /// Options-Dialog oeffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Neue Optionen anwenden und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zuruecksetzen
    ResetOptions,
}

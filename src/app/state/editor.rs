/// Zustand der Drag-Interaktion im Viewport.
///
/// Expliziter Automat statt verstreuter Flags: Uebergaenge passieren
/// ausschliesslich ueber Commands (BeginDrag/EndDrag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt wird gezogen
    #[default]
    Idle,
    /// Der Punkt an `index` haengt am Mauszeiger
    Dragging { index: usize },
}

/// Zustand des Editor-Werkzeugs (Drag & Drop der Kontrollpunkte).
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorState {
    /// Aktueller Drag-Zustand
    pub drag: DragState,
}

impl EditorState {
    /// Erstellt den Standard-Zustand (kein aktiver Drag).
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
        }
    }

    /// Index des gerade gezogenen Punkts, falls ein Drag aktiv ist.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging { index } => Some(index),
            DragState::Idle => None,
        }
    }
}

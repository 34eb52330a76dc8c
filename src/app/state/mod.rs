/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Polygon, Kurve, View, Drag).
mod app_state;
mod editor;
mod view;

pub use app_state::AppState;
pub use editor::{DragState, EditorState};
pub use view::ViewState;

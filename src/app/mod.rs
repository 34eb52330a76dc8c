//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Polygon, Kurve, Drag, Optionen).
pub mod state;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState, EditorState, ViewState};

//! Bezier Curve Editor Library.
//! Core-Funktionalitaet als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState};
pub use self::core::{bernstein, binomial, sample_curve, ControlPolygon, DeviceSpace, DEFAULT_QUAD};
pub use shared::{EditorOptions, RenderScene};

//! UI-Komponenten: Menue, Status-Bar, Input-Handling, Options-Dialog.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menue, Status, Dialog).
/// Keyboard-Shortcuts und Maus-Input sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;

//! Top-Menue (File, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menue-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit (Esc)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Polygon zuruecksetzen (Ctrl+R)").clicked() {
                    events.push(AppIntent::ResetPolygonRequested);
                    ui.close();
                }

                ui.separator();

                let options_label = if state.show_options_dialog {
                    "Optionen schliessen"
                } else {
                    "Optionen..."
                };
                if ui.button(options_label).clicked() {
                    if state.show_options_dialog {
                        events.push(AppIntent::CloseOptionsDialogRequested);
                    } else {
                        events.push(AppIntent::OpenOptionsDialogRequested);
                    }
                    ui.close();
                }
            });
        });
    });

    events
}

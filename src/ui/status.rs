//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Kontrollpunkte: {}/{}",
                state.point_count(),
                state.options.max_points
            ));

            ui.separator();

            ui.label(format!("Kurven-Samples: {}", state.sampled_curve.len()));

            ui.separator();

            match state.editor.drag {
                DragState::Dragging { index } => {
                    ui.label(format!("Drag: Punkt {}", index));
                }
                DragState::Idle => {
                    ui.label("Linksklick: ziehen/anlegen | Rechtsklick: loeschen");
                }
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

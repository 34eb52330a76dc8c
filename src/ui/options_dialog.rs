//! Optionen-Dialog fuer Grenzen, Sampling, Farben und Breiten.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurueck.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen fuer Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(420.0)
                .show(ui, |ui| {
                    // ── Polygon ─────────────────────────────────────
                    ui.collapsing("Polygon", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Max. Punkte:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_points)
                                        .range(opts.min_points + 1..=16),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Min. Punkte (Loesch-Schwelle):");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.min_points).range(1..=8))
                                .changed();
                        });
                    });

                    // ── Kurve ───────────────────────────────────────
                    ui.collapsing("Kurve", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Abtast-Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_sample_count)
                                        .range(1..=1000),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienbreite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_line_width_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.curve_color);
                    });

                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Hit-Radius (Device):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_radius_device)
                                        .range(0.01..=0.5)
                                        .speed(0.005),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Drag-Groessenfaktor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.drag_size_factor)
                                        .range(1.0..=3.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Punktgroesse (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_size_px)
                                        .range(2.0..=40.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Punktfarbe:", &mut opts.point_color);
                        changed |= color_edit(ui, "Drag-Farbe:", &mut opts.point_color_dragged);
                        ui.horizontal(|ui| {
                            ui.label("Polygon-Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.polygon_line_width_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Polygonfarbe:", &mut opts.polygon_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schliessen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Sofortige Anwendung geaenderter Werte
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor fuer [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}

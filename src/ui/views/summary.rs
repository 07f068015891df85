use egui::{CentralPanel, Context, Grid, ScrollArea};

use crate::WordApp;
use crate::view_models::answer_rows;

pub fn ui_summary(app: &mut WordApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;
        let total_height = 500.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        ui.add_space(extra_space);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("¡Test completado!");
                    ui.add_space(6.0);

                    if let Some(result) = &app.last_result {
                        ui.label(format!(
                            "Correctas: {}/{} — Puntuación: {} puntos",
                            result.score,
                            result.total,
                            result.score * 10
                        ));
                        ui.add_space(10.0);

                        let rows = answer_rows(result);
                        ScrollArea::vertical()
                            .max_height(320.0)
                            .max_width(panel_width)
                            .show(ui, |ui| {
                                Grid::new("answers_grid")
                                    .striped(true)
                                    .spacing([12.0, 4.0])
                                    .show(ui, |ui| {
                                        ui.label("#");
                                        ui.label("Palabra");
                                        ui.label("Tu respuesta");
                                        ui.label("Resultado");
                                        ui.end_row();

                                        for r in &rows {
                                            ui.label(r.index_1based.to_string());
                                            ui.label(&r.word);
                                            ui.label(&r.user_answer);
                                            ui.label(r.status_label());
                                            ui.end_row();
                                        }
                                    });
                            });
                    } else {
                        ui.label("No hay datos del último test.");
                    }

                    ui.add_space(14.0);

                    ui.horizontal(|ui| {
                        ui.add_space((panel_width - button_width * 2.0 - 8.0).max(0.0) / 2.0);
                        if ui
                            .add_sized([button_width, button_height], egui::Button::new("🔄 Nuevo test"))
                            .clicked()
                        {
                            app.empezar_test();
                        }
                        if ui
                            .add_sized([button_width, button_height], egui::Button::new("🏠 Menú"))
                            .clicked()
                        {
                            app.volver_al_menu();
                        }
                    });

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
        });
    });
}

use egui::{Align, Button, CentralPanel, Context};

use crate::WordApp;

pub fn ui_welcome(app: &mut WordApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Centrar verticalmente
        let estimated_h = 260.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading("📚 Test de vocabulario");
                        ui.add_space(8.0);
                        ui.label(app.difficult_label());
                        ui.label(app.mastered_label());
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        let btn_start =
                            ui.add_sized([btn_w, btn_h], Button::new("▶ Empezar test"));
                        ui.add_space(5.0);
                        let btn_settings =
                            ui.add_sized([btn_w, btn_h], Button::new("⚙ Ajustes"));
                        ui.add_space(5.0);
                        let btn_exit = ui.add_sized([btn_w, btn_h], Button::new("❌ Salir"));

                        if btn_start.clicked() {
                            app.empezar_test();
                        }
                        if btn_settings.clicked() {
                            app.abrir_ajustes();
                        }
                        if btn_exit.clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(&app.message);
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}

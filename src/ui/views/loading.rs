use egui::{Context, RichText, Spinner};

use crate::WordApp;
use crate::ui::layout::centered_panel;

pub fn ui_loading(app: &mut WordApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("Preparando el test…").heading());
            ui.add_space(8.0);
            ui.label("Consultando los significados de las palabras");
            ui.add_space(20.0);
            ui.add(Spinner::new().size(32.0));

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}

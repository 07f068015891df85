use egui::{Context, Slider};

use crate::WordApp;
use crate::model::{MAX_WORDS_PER_TEST, MIN_WORDS_PER_TEST};

pub fn settings_window(app: &mut WordApp, ctx: &Context) {
    egui::Window::new("⚙ Ajustes")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Palabras por test:");
            ui.add(Slider::new(
                &mut app.settings_draft.words_per_test,
                MIN_WORDS_PER_TEST..=MAX_WORDS_PER_TEST,
            ));

            ui.add_space(8.0);
            ui.label("Pausa de feedback (ms, 0 la desactiva):");
            ui.add(Slider::new(&mut app.settings_draft.feedback_millis, 0..=2000));

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Guardar").clicked() {
                    app.guardar_ajustes();
                }
                if ui.button("Cancelar").clicked() {
                    app.cancelar_ajustes();
                }
            });
        });
}

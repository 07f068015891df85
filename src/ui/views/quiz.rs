use egui::{CentralPanel, Color32, Context, Key, RichText, ScrollArea, Spinner, TextEdit};

use crate::WordApp;
use crate::model::hint_for;
use crate::ui::layout::two_button_row;

pub fn ui_quiz(app: &mut WordApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar; de vuelta al menú
    if app.session.is_none() {
        app.volver_al_menu();
        return;
    }

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 150.0 + 180.0 + 48.0 + 48.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(app.progress_label());
                    ui.add_space(10.0);

                    if !app.current_word_ready() {
                        // El usuario va más rápido que el worker: no se lee
                        // por delante del cursor resuelto.
                        ui.add_space(40.0);
                        ui.add(Spinner::new());
                        ui.add_space(8.0);
                        ui.label("Esperando al diccionario…");
                        ui.add_space(40.0);
                        return;
                    }

                    let word = app
                        .session
                        .as_ref()
                        .and_then(|s| s.current_word())
                        .unwrap_or_default()
                        .to_owned();
                    let meaning = app.current_meaning().unwrap_or_default().to_owned();

                    // Significado con scroll fijo
                    let meaning_max_height = 180.0;
                    ScrollArea::vertical()
                        .max_height(meaning_max_height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            ui.label(&meaning);
                        });

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(hint_for(&word))
                            .color(Color32::from_rgb(0x34, 0x98, 0xdb))
                            .strong(),
                    );
                    ui.add_space(10.0);

                    let response = ui.add(
                        TextEdit::singleline(&mut app.input)
                            .hint_text("Escribe la palabra en inglés…")
                            .desired_width(panel_width * 0.8),
                    );
                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    if enter_pressed {
                        app.comprobar_respuesta();
                        response.request_focus();
                    }

                    ui.add_space(8.0);

                    let (enviar, no_se) = two_button_row(ui, panel_width, "Enviar", "❓ No la sé");
                    if enviar {
                        app.comprobar_respuesta();
                    }
                    if no_se {
                        app.no_la_se();
                    }

                    ui.add_space(8.0);
                    ui.label(app.score_label());

                    ui.add_space(8.0);
                    if let Some(pending) = &app.pending_advance {
                        let color = if pending.correct {
                            Color32::LIGHT_GREEN
                        } else {
                            Color32::LIGHT_RED
                        };
                        ui.label(RichText::new(&app.message).color(color).strong());
                    } else if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}

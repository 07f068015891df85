pub mod layout;
pub mod views;

use std::time::Duration;

use eframe::{App, Frame};
use egui::Context;

use crate::app::WordApp;
use crate::model::AppState;

impl App for WordApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge eventos del worker y consume la pausa de feedback
        self.tick();

        // BARRA SUPERIOR con estadísticas y ajustes (no en la bienvenida)
        if matches!(self.state, AppState::Quiz | AppState::Summary | AppState::Loading) {
            layout::top_panel(self, ctx);
        }

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
        }

        if self.show_settings {
            views::settings::settings_window(self, ctx);
        }

        // Mientras se espera al worker o a la pausa no hay input que nos
        // despierte: repintar a mano.
        let waiting = self.state == AppState::Loading
            || self.pending_advance.is_some()
            || (self.state == AppState::Quiz && !self.current_word_ready());
        if waiting {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
    }
}

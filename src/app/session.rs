use std::sync::Arc;
use std::time::Instant;

use super::*;
use crate::prefetch::Prefetcher;
use crate::selector::select_session_words;

impl WordApp {
    /// Arranca un test nuevo con una extracción fresca del selector.
    pub fn empezar_test(&mut self) {
        let words = select_session_words(
            self.settings.words_per_test as usize,
            self.store.words(),
            &self.store.difficult_words(),
            &mut rand::thread_rng(),
        );
        self.arrancar_sesion(words);
    }

    /// Monta la sesión y lanza su worker de prefetch. Si hay un worker de
    /// una sesión anterior todavía vivo, primero se para y se espera:
    /// nunca hay dos workers escribiendo significados a la vez.
    pub(crate) fn arrancar_sesion(&mut self, words: Vec<String>) {
        if let Some(mut previous) = self.prefetcher.take() {
            previous.stop();
        }

        self.prefetcher = Some(Prefetcher::spawn(
            words.clone(),
            self.cache.clone(),
            Arc::clone(&self.source),
        ));
        self.session = Some(Session::new(words));
        self.state = AppState::Loading;
        self.input.clear();
        self.message.clear();
        self.pending_advance = None;
        self.last_result = None;
    }

    /// Se llama en cada frame: recoge eventos del worker, pasa de la
    /// pantalla de carga al quiz cuando la primera palabra está lista y
    /// consume la pausa de feedback.
    pub fn tick(&mut self) {
        if let Some(p) = self.prefetcher.as_mut() {
            p.poll();
        }

        if self.state == AppState::Loading
            && self.prefetcher.as_ref().is_some_and(|p| p.first_ready())
        {
            self.state = AppState::Quiz;
        }

        if let Some(pending) = &self.pending_advance {
            if Instant::now() >= pending.due_at {
                self.avanzar_palabra();
            }
        }
    }

    /// Abandona la sesión en curso y vuelve al menú. El lote cancelado
    /// se descarta; la caché compartida conserva lo ya resuelto.
    pub fn volver_al_menu(&mut self) {
        if let Some(mut p) = self.prefetcher.take() {
            p.stop();
        }
        self.session = None;
        self.pending_advance = None;
        self.input.clear();
        self.state = AppState::Welcome;
    }

    /// Cierre ordenado: parar y esperar al worker antes de salir.
    pub fn shutdown(&mut self) {
        if let Some(mut p) = self.prefetcher.take() {
            p.stop();
        }
    }
}

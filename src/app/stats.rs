use super::*;

impl WordApp {
    // Accesores de sólo lectura para las vistas

    pub fn difficult_label(&self) -> String {
        format!("📒 Difíciles: {}", self.store.difficult_count())
    }

    pub fn mastered_label(&self) -> String {
        let (count, total, percentage) = self.store.mastered_stats();
        format!("🏆 Dominadas: {count}/{total} ({percentage:.1}%)")
    }

    pub fn progress_label(&self) -> String {
        match &self.session {
            Some(s) => format!("Progreso: {}/{}", (s.current + 1).min(s.words.len()), s.words.len()),
            None => String::new(),
        }
    }

    pub fn score_label(&self) -> String {
        match &self.session {
            Some(s) => format!("Puntuación: {}", s.correct),
            None => String::new(),
        }
    }

    /// Significado de la palabra actual, si el prefetch ya la resolvió.
    pub fn current_meaning(&self) -> Option<&str> {
        let word = self.session.as_ref()?.current_word()?;
        self.prefetcher.as_ref()?.meaning_for(word)
    }

    /// `true` si la palabra actual ya se puede mostrar.
    pub fn current_word_ready(&self) -> bool {
        self.session
            .as_ref()
            .zip(self.prefetcher.as_ref())
            .is_some_and(|(s, p)| p.is_resolved(s.current))
    }
}

use std::time::{Duration, Instant};

use log::warn;

use super::*;
use crate::error::AppError;
use crate::model::answer_matches;

impl WordApp {
    /// Corrige la respuesta escrita para la palabra actual. Las mutaciones
    /// del almacén (dominadas, repasos) ocurren aquí mismo, en el hilo de
    /// la interfaz; el avance se retrasa la pausa de feedback configurada.
    pub fn comprobar_respuesta(&mut self) {
        if self.pending_advance.is_some() {
            return;
        }
        let Some((word, meaning)) = self.palabra_actual_resuelta() else {
            return;
        };

        let user_answer = self.input.trim().to_lowercase();
        if user_answer.is_empty() {
            self.message = "⚠ Escribe una respuesta antes de enviar.".into();
            return;
        }

        let is_correct = answer_matches(&user_answer, &word);

        if is_correct {
            self.message = "✅ ¡Correcto!".into();
            if let Some(session) = self.session.as_mut() {
                session.correct += 1;
            }
            if let Err(e) = self.store.add_to_mastered(&word) {
                self.report_save_error(e);
            }
            if self.store.is_difficult(&word) {
                match self.store.increment_review_count(&word) {
                    Ok(true) => {
                        self.message =
                            format!("🎉 ¡\"{word}\" dominada! Sale del cuaderno de difíciles.");
                    }
                    Ok(false) => {}
                    Err(e) => self.report_save_error(e),
                }
            }
        } else {
            // Al fallar se revela la palabra; no hay cambios en el cuaderno
            self.message = format!("❌ Incorrecto. La palabra era \"{word}\".");
        }

        if let Some(session) = self.session.as_mut() {
            session.answers.push(AnswerRecord {
                word,
                meaning,
                user_answer,
                is_correct,
                added_to_difficult: false,
            });
        }

        self.pending_advance = Some(PendingAdvance {
            correct: is_correct,
            due_at: Instant::now() + Duration::from_millis(self.settings.feedback_millis),
        });
    }

    /// "No la sé": apunta la palabra al cuaderno con el significado ya
    /// resuelto y avanza sin pedir respuesta escrita.
    pub fn no_la_se(&mut self) {
        if self.pending_advance.is_some() {
            return;
        }
        let Some((word, meaning)) = self.palabra_actual_resuelta() else {
            return;
        };

        if let Err(e) = self.store.add_to_difficult(&word, &meaning) {
            self.report_save_error(e);
        } else {
            self.message = format!("📒 \"{word}\" apuntada en el cuaderno de difíciles.");
        }

        if let Some(session) = self.session.as_mut() {
            session.answers.push(AnswerRecord {
                word,
                meaning,
                user_answer: "no la sé".into(),
                is_correct: false,
                added_to_difficult: true,
            });
        }

        self.avanzar_palabra();
    }

    /// Pasa a la siguiente palabra; tras la última, cierra el test.
    pub(crate) fn avanzar_palabra(&mut self) {
        self.pending_advance = None;
        self.input.clear();

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current += 1;
        if session.is_over() {
            self.finalizar_test();
        }
    }

    /// Persiste el resultado y pasa al resumen. Un fallo de escritura se
    /// avisa pero no tira la sesión: el resumen sigue en memoria.
    fn finalizar_test(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let result = TestResult {
            date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            score: session.correct,
            total: session.words.len(),
            details: session.answers.clone(),
        };
        if let Err(e) = self.store.append_test_result(&result) {
            self.report_save_error(e);
        }
        self.last_result = Some(result);
        self.state = AppState::Summary;
    }

    /// Palabra actual con su significado, sólo si el prefetch ya la
    /// resolvió. La interfaz no deja actuar por delante del cursor.
    fn palabra_actual_resuelta(&self) -> Option<(String, String)> {
        let session = self.session.as_ref()?;
        let word = session.current_word()?;
        let meaning = self.prefetcher.as_ref()?.meaning_for(word)?;
        Some((word.to_owned(), meaning.to_owned()))
    }

    fn report_save_error(&mut self, e: AppError) {
        warn!("{e}");
        self.message = format!("⚠ {e}");
    }
}

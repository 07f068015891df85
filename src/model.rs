use serde::{Deserialize, Serialize};

/// Entrada del cuaderno de palabras difíciles. Se crea cuando el usuario
/// pulsa "no la sé" y desaparece al acertarla 3 veces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DifficultEntry {
    pub meaning: String,
    pub added_date: String, // "%Y-%m-%d %H:%M:%S"
    #[serde(default)]
    pub review_count: u32,
}

/// Aciertos necesarios para que una palabra difícil se considere dominada.
pub const GRADUATION_REVIEWS: u32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub word: String,
    pub meaning: String,
    pub user_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub added_to_difficult: bool,
}

/// Resultado de un test completo; se añade al historial y nunca se modifica.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestResult {
    pub date: String,
    pub score: u32,
    pub total: usize,
    pub details: Vec<AnswerRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_words_per_test")]
    pub words_per_test: u32,
    #[serde(default = "default_feedback_millis")]
    pub feedback_millis: u64,
}

pub const MIN_WORDS_PER_TEST: u32 = 5;
pub const MAX_WORDS_PER_TEST: u32 = 50;

fn default_words_per_test() -> u32 {
    10
}

fn default_feedback_millis() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_test: default_words_per_test(),
            feedback_millis: default_feedback_millis(),
        }
    }
}

impl Settings {
    /// La UI sólo permite valores entre 5 y 50; el archivo podría traer otros.
    pub fn clamped(mut self) -> Self {
        self.words_per_test = self
            .words_per_test
            .clamp(MIN_WORDS_PER_TEST, MAX_WORDS_PER_TEST);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    /// Sesión arrancada, esperando a que el prefetch resuelva la primera palabra.
    Loading,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

/// Pista mostrada junto al significado: inicial + longitud.
pub fn hint_for(word: &str) -> String {
    let initial = word.chars().next().unwrap_or(' ');
    format!(
        "Pista: empieza por \"{}\" y tiene {} letras",
        initial,
        word.chars().count()
    )
}

/// Comparación de respuestas: recortada y sin distinguir mayúsculas.
pub fn answer_matches(user_answer: &str, word: &str) -> bool {
    user_answer.trim().to_lowercase() == word.to_lowercase()
}

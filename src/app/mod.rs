use std::sync::Arc;
use std::time::Instant;

use crate::lookup::{DeepSeekClient, MeaningCache, MeaningSource};
use crate::model::{AnswerRecord, AppState, Settings, TestResult};
use crate::prefetch::Prefetcher;
use crate::store::WordStore;

// Submódulos
pub mod actions;
pub mod session;
pub mod settings;
pub mod stats;

/// Sesión en curso. La secuencia de palabras y el reparto difícil/normal
/// quedan fijados al arrancar y no cambian durante el test.
pub struct Session {
    pub words: Vec<String>,
    pub current: usize,
    pub correct: u32,
    pub answers: Vec<AnswerRecord>,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            current: 0,
            correct: 0,
            answers: Vec::new(),
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current).map(String::as_str)
    }

    pub fn is_over(&self) -> bool {
        self.current >= self.words.len()
    }
}

/// Pausa de feedback tras puntuar: cuándo avanzar y con qué color.
pub struct PendingAdvance {
    pub correct: bool,
    pub due_at: Instant,
}

pub struct WordApp {
    pub store: WordStore,
    pub settings: Settings,
    pub cache: MeaningCache,
    pub source: Arc<dyn MeaningSource>,
    pub session: Option<Session>,
    pub prefetcher: Option<Prefetcher>,
    pub state: AppState,
    pub input: String,
    pub message: String,
    pub pending_advance: Option<PendingAdvance>,
    pub last_result: Option<TestResult>,
    pub show_settings: bool,
    pub settings_draft: Settings,
}

impl WordApp {
    pub fn new(store: WordStore) -> Self {
        Self::with_source(store, Arc::new(DeepSeekClient::from_env()))
    }

    /// Permite inyectar otro diccionario (los tests usan uno falso).
    pub fn with_source(store: WordStore, source: Arc<dyn MeaningSource>) -> Self {
        let settings = settings::load_settings(store.paths());
        Self {
            store,
            settings_draft: settings.clone(),
            settings,
            cache: MeaningCache::new(),
            source,
            session: None,
            prefetcher: None,
            state: AppState::Welcome,
            input: String::new(),
            message: String::new(),
            pending_advance: None,
            last_result: None,
            show_settings: false,
        }
    }
}

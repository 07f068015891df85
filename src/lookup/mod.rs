use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::info;

use crate::error::AppError;

pub mod deepseek;

pub use deepseek::DeepSeekClient;

/// Colaborador externo que traduce una palabra a una explicación en
/// lenguaje natural. Puede ser lento y puede fallar; el que llama decide
/// qué hacer con el error.
pub trait MeaningSource: Send + Sync {
    fn meaning(&self, word: &str) -> Result<String, AppError>;
}

/// Caché palabra → significado compartida entre sesiones. Vive lo que el
/// proceso y se pasa explícitamente a quien la necesita; sólo el worker de
/// prefetch escribe en ella.
#[derive(Clone, Default)]
pub struct MeaningCache {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MeaningCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<String> {
        let hit = self.inner.lock().expect("meaning cache poisoned").get(word).cloned();
        if hit.is_some() {
            info!("cache hit para \"{word}\"");
        }
        hit
    }

    pub fn insert(&self, word: &str, meaning: &str) {
        self.inner
            .lock()
            .expect("meaning cache poisoned")
            .insert(word.to_owned(), meaning.to_owned());
    }
}

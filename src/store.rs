use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::AppError;
use crate::model::{DifficultEntry, GRADUATION_REVIEWS, TestResult};

/// Rutas de los archivos persistidos. El banco de palabras vive en la raíz
/// y los datos del usuario en `user/`, que se crea bajo demanda.
#[derive(Debug, Clone)]
pub struct StorePaths {
    base: PathBuf,
}

impl StorePaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn words_file(&self) -> PathBuf {
        self.base.join("words.json")
    }

    pub fn user_dir(&self) -> PathBuf {
        self.base.join("user")
    }

    pub fn difficult_file(&self) -> PathBuf {
        self.user_dir().join("difficult_words.json")
    }

    pub fn mastered_file(&self) -> PathBuf {
        self.user_dir().join("mastered_words.json")
    }

    pub fn results_file(&self) -> PathBuf {
        self.user_dir().join("test_results.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.user_dir().join("settings.json")
    }
}

/// Almacén de palabras: banco maestro, cuaderno de difíciles y lista de
/// dominadas. Todas las escrituras salen del hilo de la interfaz, en orden.
pub struct WordStore {
    paths: StorePaths,
    words: Vec<String>,
    difficult: BTreeMap<String, DifficultEntry>,
    mastered: Vec<String>,
}

/// Mínimo de palabras del banco maestro para poder montar un test.
pub const MIN_MASTER_WORDS: usize = 10;

impl WordStore {
    /// Carga el banco maestro y los archivos del usuario. El banco es
    /// obligatorio (y con al menos 10 palabras); difíciles y dominadas
    /// ausentes se sustituyen por valores vacíos.
    pub fn load(paths: StorePaths) -> Result<Self, AppError> {
        let words = load_master_list(&paths.words_file())?;

        let difficult = match read_user_file(&paths.difficult_file()) {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::DataLoad(format!("difficult_words.json inválido: {e}")))?,
            None => BTreeMap::new(),
        };

        let mastered = match read_user_file(&paths.mastered_file()) {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::DataLoad(format!("mastered_words.json inválido: {e}")))?,
            None => Vec::new(),
        };

        info!(
            "banco cargado: {} palabras, {} difíciles, {} dominadas",
            words.len(),
            difficult.len(),
            mastered.len()
        );

        Ok(Self {
            paths,
            words,
            difficult,
            mastered,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn difficult_words(&self) -> Vec<String> {
        self.difficult.keys().cloned().collect()
    }

    pub fn is_difficult(&self, word: &str) -> bool {
        self.difficult.contains_key(word)
    }

    pub fn difficult_entry(&self, word: &str) -> Option<&DifficultEntry> {
        self.difficult.get(word)
    }

    /// Añade (o sobrescribe) una palabra al cuaderno de difíciles con el
    /// contador de repasos a cero.
    pub fn add_to_difficult(&mut self, word: &str, meaning: &str) -> Result<(), AppError> {
        self.difficult.insert(
            word.to_owned(),
            DifficultEntry {
                meaning: meaning.to_owned(),
                added_date: now_stamp(),
                review_count: 0,
            },
        );
        self.save_difficult()
    }

    /// Apunta la palabra como dominada. Idempotente: nunca se duplica
    /// y nunca se elimina.
    pub fn add_to_mastered(&mut self, word: &str) -> Result<(), AppError> {
        if !self.mastered.iter().any(|w| w == word) {
            self.mastered.push(word.to_owned());
            self.save_mastered()?;
        }
        Ok(())
    }

    /// Suma un repaso a una palabra difícil. Devuelve `true` si con este
    /// acierto la palabra se gradúa (3 repasos) y sale del cuaderno.
    pub fn increment_review_count(&mut self, word: &str) -> Result<bool, AppError> {
        let Some(entry) = self.difficult.get_mut(word) else {
            return Ok(false);
        };
        entry.review_count += 1;
        let graduated = entry.review_count >= GRADUATION_REVIEWS;
        if graduated {
            self.difficult.remove(word);
        }
        self.save_difficult()?;
        Ok(graduated)
    }

    /// Añade el resultado de un test al historial (leer, añadir, reescribir).
    pub fn append_test_result(&mut self, result: &TestResult) -> Result<(), AppError> {
        let path = self.paths.results_file();
        let mut all_results: Vec<TestResult> = match read_user_file(&path) {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::persistence(&path, e))?,
            None => Vec::new(),
        };
        all_results.push(result.clone());
        self.write_pretty(&path, &all_results)
    }

    pub fn difficult_count(&self) -> usize {
        self.difficult.len()
    }

    /// (dominadas, total del banco, porcentaje).
    pub fn mastered_stats(&self) -> (usize, usize, f32) {
        let count = self.mastered.len();
        let total = self.words.len();
        let percentage = if total > 0 {
            count as f32 / total as f32 * 100.0
        } else {
            0.0
        };
        (count, total, percentage)
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    fn save_difficult(&self) -> Result<(), AppError> {
        self.write_pretty(&self.paths.difficult_file(), &self.difficult)
    }

    fn save_mastered(&self) -> Result<(), AppError> {
        self.write_pretty(&self.paths.mastered_file(), &self.mastered)
    }

    fn write_pretty<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), AppError> {
        if let Err(e) = fs::create_dir_all(self.paths.user_dir()) {
            warn!("no se pudo crear el directorio de usuario: {e}");
            return Err(AppError::persistence(path, e));
        }
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::persistence(path, e))?;
        fs::write(path, json).map_err(|e| AppError::persistence(path, e))
    }
}

/// Lee un archivo de usuario. Que falte es normal (primer arranque) y se
/// sustituye en silencio; cualquier otro fallo de acceso se avisa y también
/// se recupera en local.
pub(crate) fn read_user_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(json) => Some(json),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            let err = AppError::FileAccess {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            warn!("{err}");
            None
        }
    }
}

fn load_master_list(path: &Path) -> Result<Vec<String>, AppError> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::DataLoad(format!("no se pudo leer {}: {e}", path.display()))
    })?;
    let words: Vec<String> = serde_json::from_str(&json)
        .map_err(|e| AppError::DataLoad(format!("formato JSON incorrecto: {e}")))?;
    if words.len() < MIN_MASTER_WORDS {
        return Err(AppError::DataLoad(format!(
            "muy pocas palabras: se necesitan al menos {MIN_MASTER_WORDS}"
        )));
    }
    Ok(words)
}

fn now_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerRecord;

    fn store_with_words(dir: &Path, words: &[&str]) -> WordStore {
        let paths = StorePaths::new(dir);
        let json = serde_json::to_string_pretty(words).unwrap();
        fs::write(paths.words_file(), json).unwrap();
        WordStore::load(paths).unwrap()
    }

    const TWELVE: [&str; 12] = [
        "apple", "banana", "cherry", "grape", "lemon", "mango", "melon", "orange", "peach",
        "pear", "plum", "kiwi",
    ];

    #[test]
    fn load_rejects_short_master_list() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StorePaths::new(dir.path());
        fs::write(paths.words_file(), r#"["uno", "dos", "tres"]"#).unwrap();
        assert!(matches!(
            WordStore::load(paths),
            Err(AppError::DataLoad(_))
        ));
    }

    #[test]
    fn load_substitutes_missing_user_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(dir.path(), &TWELVE);
        assert_eq!(store.difficult_count(), 0);
        assert_eq!(store.mastered_stats().0, 0);
    }

    #[test]
    fn mastered_append_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with_words(dir.path(), &TWELVE);
        store.add_to_mastered("apple").unwrap();
        store.add_to_mastered("apple").unwrap();
        assert_eq!(store.mastered_stats().0, 1);
    }

    #[test]
    fn review_count_graduates_at_three() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with_words(dir.path(), &TWELVE);
        store.add_to_difficult("apple", "una fruta").unwrap();

        assert!(!store.increment_review_count("apple").unwrap());
        assert_eq!(store.difficult_entry("apple").unwrap().review_count, 1);
        assert!(!store.increment_review_count("apple").unwrap());
        assert_eq!(store.difficult_entry("apple").unwrap().review_count, 2);

        // Al tercer acierto se gradúa y sale del cuaderno
        assert!(store.increment_review_count("apple").unwrap());
        assert!(!store.is_difficult("apple"));

        // Una vez fuera, más aciertos no hacen nada
        assert!(!store.increment_review_count("apple").unwrap());
    }

    #[test]
    fn dont_know_overwrites_and_resets_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with_words(dir.path(), &TWELVE);
        store.add_to_difficult("banana", "otra fruta").unwrap();
        store.increment_review_count("banana").unwrap();

        store.add_to_difficult("banana", "otra fruta").unwrap();
        assert_eq!(store.difficult_entry("banana").unwrap().review_count, 0);
    }

    #[test]
    fn difficult_and_mastered_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = store_with_words(dir.path(), &TWELVE);
            store.add_to_difficult("apple", "una fruta roja").unwrap();
            store.add_to_difficult("pear", "una fruta verde").unwrap();
            store.increment_review_count("pear").unwrap();
            store.add_to_mastered("banana").unwrap();
            store.add_to_mastered("cherry").unwrap();
        }

        let reloaded = WordStore::load(StorePaths::new(dir.path())).unwrap();
        assert_eq!(reloaded.difficult_count(), 2);
        assert_eq!(reloaded.difficult_entry("pear").unwrap().review_count, 1);
        assert_eq!(
            reloaded.difficult_entry("apple").unwrap().meaning,
            "una fruta roja"
        );
        assert_eq!(reloaded.mastered_stats().0, 2);
    }

    #[test]
    fn history_appends_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with_words(dir.path(), &TWELVE);

        let result = TestResult {
            date: "2026-08-08 10:00:00".to_owned(),
            score: 7,
            total: 10,
            details: vec![AnswerRecord {
                word: "apple".into(),
                meaning: "una fruta".into(),
                user_answer: "apple".into(),
                is_correct: true,
                added_to_difficult: false,
            }],
        };
        store.append_test_result(&result).unwrap();
        store.append_test_result(&result).unwrap();

        let json = fs::read_to_string(store.paths().results_file()).unwrap();
        let history: Vec<TestResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], result);
    }
}

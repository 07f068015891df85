use std::fs;

use log::warn;

use super::*;
use crate::error::AppError;
use crate::store::StorePaths;

/// Carga `user/settings.json`; si falta o está corrupto se usan los
/// valores por defecto (nunca es fatal).
pub fn load_settings(paths: &StorePaths) -> Settings {
    match crate::store::read_user_file(&paths.settings_file()) {
        Some(json) => match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!("settings.json inválido, se usan los valores por defecto: {e}");
                Settings::default()
            }
        },
        None => Settings::default(),
    }
}

impl WordApp {
    pub fn abrir_ajustes(&mut self) {
        self.settings_draft = self.settings.clone();
        self.show_settings = true;
    }

    pub fn cancelar_ajustes(&mut self) {
        self.show_settings = false;
    }

    /// Aplica el borrador y lo persiste. Los nuevos valores se usan en el
    /// próximo test; la sesión en curso no cambia de tamaño.
    pub fn guardar_ajustes(&mut self) {
        self.settings = self.settings_draft.clone().clamped();
        self.show_settings = false;

        let path = self.store.paths().settings_file();
        let result = fs::create_dir_all(self.store.paths().user_dir())
            .map_err(|e| AppError::persistence(&path, e))
            .and_then(|_| {
                serde_json::to_string_pretty(&self.settings)
                    .map_err(|e| AppError::persistence(&path, e))
            })
            .and_then(|json| {
                fs::write(&path, json).map_err(|e| AppError::persistence(&path, e))
            });

        match result {
            Ok(()) => {
                self.message =
                    "Ajustes guardados. Se aplicarán al empezar el próximo test.".into();
            }
            Err(e) => {
                warn!("{e}");
                self.message = format!("⚠ {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MeaningSource;
    use crate::store::WordStore;
    use std::sync::Arc;

    struct NullSource;

    impl MeaningSource for NullSource {
        fn meaning(&self, _word: &str) -> Result<String, AppError> {
            Ok(String::new())
        }
    }

    fn store_in(dir: &std::path::Path) -> WordStore {
        let paths = StorePaths::new(dir);
        let words: Vec<String> = (0..12).map(|i| format!("palabra{i}")).collect();
        fs::write(paths.words_file(), serde_json::to_string(&words).unwrap()).unwrap();
        WordStore::load(paths).unwrap()
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&StorePaths::new(dir.path()));
        assert_eq!(settings.words_per_test, 10);
        assert_eq!(settings.feedback_millis, 500);
    }

    #[test]
    fn saved_settings_round_trip_with_clamping() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = WordApp::with_source(store_in(dir.path()), Arc::new(NullSource));

        app.abrir_ajustes();
        app.settings_draft.words_per_test = 120; // fuera del rango de la UI
        app.guardar_ajustes();
        assert_eq!(app.settings.words_per_test, 50);

        let reloaded = load_settings(app.store.paths());
        assert_eq!(reloaded.words_per_test, 50);
    }
}

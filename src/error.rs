use std::path::PathBuf;

use thiserror::Error;

/// Errores de la aplicación, agrupados según su política de recuperación:
/// `DataLoad` es fatal en el arranque; el resto se contienen y se muestran
/// como mensajes al usuario.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("error al cargar los datos de palabras: {0}")]
    DataLoad(String),

    #[error("no se pudo leer {path}: {message}")]
    FileAccess { path: PathBuf, message: String },

    #[error("no se pudo guardar {path}: {message}")]
    Persistence { path: PathBuf, message: String },

    #[error("fallo al consultar el significado de \"{word}\": {message}")]
    Lookup { word: String, message: String },
}

impl AppError {
    pub fn persistence(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AppError::Persistence {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn lookup(word: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AppError::Lookup {
            word: word.into(),
            message: err.to_string(),
        }
    }
}

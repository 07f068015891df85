use log::{error, info};
use serde::{Deserialize, Serialize};

use super::MeaningSource;
use crate::error::AppError;

const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/chat/completions";
const MODEL: &str = "deepseek-chat";

/// Prompt de sistema si no existe `prompts/default.md`.
const FALLBACK_PROMPT: &str = "Eres un diccionario de inglés para hispanohablantes. \
Dada una palabra inglesa, responde con su significado en español, \
una frase de ejemplo en inglés y su traducción. No repitas la palabra consultada.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Cliente del API de chat de DeepSeek sobre `reqwest` bloqueante. Siempre
/// se usa desde el worker de prefetch, nunca desde el hilo de la interfaz.
pub struct DeepSeekClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    system_prompt: String,
}

impl DeepSeekClient {
    /// Clave desde `DEEPSEEK_API_KEY`; el endpoint se puede redirigir con
    /// `WORD_TRAINER_LLM_ENDPOINT` (útil contra un servidor local).
    pub fn from_env() -> Self {
        let endpoint = std::env::var("WORD_TRAINER_LLM_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_key = std::env::var("DEEPSEEK_API_KEY").unwrap_or_default();
        let system_prompt = std::fs::read_to_string("prompts/default.md")
            .unwrap_or_else(|_| FALLBACK_PROMPT.to_string());

        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            api_key,
            system_prompt,
        }
    }

    fn build_request(&self, word: &str) -> ChatRequest<'_> {
        ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: self.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: word.to_owned(),
                },
            ],
            stream: false,
        }
    }
}

impl MeaningSource for DeepSeekClient {
    fn meaning(&self, word: &str) -> Result<String, AppError> {
        info!("pidiendo significado de \"{word}\"");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(word))
            .send()
            .map_err(|e| {
                error!("fallo de conexión para \"{word}\": {e}");
                AppError::lookup(word, e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            error!("HTTP {status} para \"{word}\": {}", body.trim());
            return Err(AppError::lookup(word, format!("HTTP {status}")));
        }

        let body: ChatResponse = response.json().map_err(|e| {
            error!("respuesta JSON inválida para \"{word}\": {e}");
            AppError::lookup(word, e)
        })?;

        let meaning = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::lookup(word, "respuesta sin choices"))?;

        info!("significado recibido para \"{word}\"");
        Ok(meaning)
    }
}

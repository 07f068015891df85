use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;

use log::{info, warn};

use crate::lookup::{MeaningCache, MeaningSource};

/// Eventos del worker hacia la interfaz. Llegan en orden de sesión:
/// un `Resolved` por índice y un `Finished` al acabar el lote.
enum PrefetchEvent {
    Resolved {
        index: usize,
        word: String,
        meaning: String,
    },
    Finished,
}

/// Prefetch de significados de una sesión. Un worker por sesión resuelve
/// las palabras estrictamente en orden y los resultados se recogen desde
/// el hilo de la interfaz con `poll`, al estilo de un canal de resultados
/// remotos. Nadie lee por delante del cursor resuelto.
pub struct Prefetcher {
    rx: Receiver<PrefetchEvent>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    meanings: HashMap<String, String>,
    resolved: usize,
    finished: bool,
}

impl Prefetcher {
    pub fn spawn(
        words: Vec<String>,
        cache: MeaningCache,
        source: Arc<dyn MeaningSource>,
    ) -> Self {
        let (tx, rx) = channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            run_worker(words, cache, source, stop_flag, tx);
        });

        Self {
            rx,
            stop,
            handle: Some(handle),
            meanings: HashMap::new(),
            resolved: 0,
            finished: false,
        }
    }

    /// Vacía el canal de eventos pendientes. Se llama en cada frame.
    pub fn poll(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                PrefetchEvent::Resolved { word, meaning, .. } => {
                    self.meanings.insert(word, meaning);
                    self.resolved += 1;
                }
                PrefetchEvent::Finished => self.finished = true,
            }
        }
    }

    /// `true` en cuanto el índice 0 está resuelto.
    pub fn first_ready(&self) -> bool {
        self.resolved > 0
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        index < self.resolved
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sólo válido para palabras ya resueltas; antes devuelve `None`.
    pub fn meaning_for(&self, word: &str) -> Option<&str> {
        self.meanings.get(word).map(String::as_str)
    }

    /// Pide al worker que pare y espera a que termine. Obligatorio antes de
    /// arrancar otra sesión o al cerrar la aplicación; los resultados
    /// parciales del lote cancelado se descartan con el propio `Prefetcher`.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("el worker de prefetch terminó con pánico");
            }
        }
    }
}

impl Drop for Prefetcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker(
    words: Vec<String>,
    cache: MeaningCache,
    source: Arc<dyn MeaningSource>,
    stop: Arc<AtomicBool>,
    tx: Sender<PrefetchEvent>,
) {
    for (index, word) in words.into_iter().enumerate() {
        if stop.load(Ordering::Relaxed) {
            info!("prefetch cancelado en el índice {index}");
            return;
        }

        let meaning = match cache.get(&word) {
            Some(cached) => cached,
            None => match source.meaning(&word) {
                Ok(meaning) => {
                    cache.insert(&word, &meaning);
                    meaning
                }
                // Fallo por palabra: se muestra el error como significado
                // y el lote continúa.
                Err(e) => {
                    warn!("no se pudo resolver \"{word}\": {e}");
                    format!("Error al obtener el significado: {e}")
                }
            },
        };

        if tx
            .send(PrefetchEvent::Resolved {
                index,
                word,
                meaning,
            })
            .is_err()
        {
            // El receptor ya no existe; no queda nadie a quien avisar.
            return;
        }
    }
    let _ = tx.send(PrefetchEvent::Finished);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    struct InstantSource;

    impl MeaningSource for InstantSource {
        fn meaning(&self, word: &str) -> Result<String, AppError> {
            Ok(format!("significado de {word}"))
        }
    }

    struct FailingSource;

    impl MeaningSource for FailingSource {
        fn meaning(&self, word: &str) -> Result<String, AppError> {
            if word == "banana" {
                Err(AppError::lookup(word, "sin red"))
            } else {
                Ok(format!("significado de {word}"))
            }
        }
    }

    struct CountingSource(AtomicUsize);

    impl MeaningSource for CountingSource {
        fn meaning(&self, word: &str) -> Result<String, AppError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(format!("significado de {word}"))
        }
    }

    struct BlockingSource;

    impl MeaningSource for BlockingSource {
        fn meaning(&self, word: &str) -> Result<String, AppError> {
            std::thread::sleep(Duration::from_millis(50));
            Ok(format!("significado de {word}"))
        }
    }

    fn session(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn poll_until_finished(p: &mut Prefetcher) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !p.is_finished() {
            assert!(Instant::now() < deadline, "el prefetch no terminó a tiempo");
            p.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn resolves_whole_batch_in_order() {
        let words = session(&["apple", "banana", "cherry"]);
        let mut p = Prefetcher::spawn(words, MeaningCache::new(), Arc::new(InstantSource));
        poll_until_finished(&mut p);

        assert!(p.first_ready());
        assert_eq!(p.meaning_for("apple"), Some("significado de apple"));
        assert_eq!(p.meaning_for("cherry"), Some("significado de cherry"));
        assert!(p.is_resolved(2));
        assert!(!p.is_resolved(3));
    }

    #[test]
    fn lookup_failure_becomes_placeholder_and_batch_continues() {
        let words = session(&["apple", "banana", "cherry"]);
        let mut p = Prefetcher::spawn(words, MeaningCache::new(), Arc::new(FailingSource));
        poll_until_finished(&mut p);

        let placeholder = p.meaning_for("banana").unwrap();
        assert!(placeholder.starts_with("Error al obtener el significado"));
        assert_eq!(p.meaning_for("cherry"), Some("significado de cherry"));
    }

    #[test]
    fn cached_words_skip_the_source() {
        let cache = MeaningCache::new();
        cache.insert("apple", "de la caché");
        let source = Arc::new(CountingSource(AtomicUsize::new(0)));

        let mut p = Prefetcher::spawn(session(&["apple", "pear"]), cache, source.clone());
        poll_until_finished(&mut p);

        assert_eq!(p.meaning_for("apple"), Some("de la caché"));
        assert_eq!(source.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_lookups_populate_the_shared_cache() {
        let cache = MeaningCache::new();
        let mut p = Prefetcher::spawn(
            session(&["apple"]),
            cache.clone(),
            Arc::new(InstantSource),
        );
        poll_until_finished(&mut p);
        assert_eq!(cache.get("apple").as_deref(), Some("significado de apple"));
    }

    #[test]
    fn stop_joins_before_the_batch_completes() {
        let words: Vec<String> = (0..100).map(|i| format!("palabra{i}")).collect();
        let mut p = Prefetcher::spawn(words, MeaningCache::new(), Arc::new(BlockingSource));
        p.stop();
        p.poll();
        assert!(!p.is_finished());
    }
}

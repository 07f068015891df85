use word_trainer::WordApp;
use word_trainer::store::{StorePaths, WordStore};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // El banco de palabras es obligatorio: sin él no hay aplicación
    let store = match WordStore::load(StorePaths::new(".")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Test de vocabulario",
        options,
        Box::new(|_cc| Ok(Box::new(WordApp::new(store)))),
    )
}

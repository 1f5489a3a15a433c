mod app;
mod model;
mod notify;
mod worker;

use app::DesktopApp;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_pdf::Config;

const WINDOW_TITLE: &str = "Word to PDF Converter";

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "word_pdf=info,word_pdf_desktop=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("config not loaded, using defaults: {err}");
        notify::show(notify::Notice::Warning, "Warning", &format!("{err}\n\nDefault settings will be used."));
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([700.0, 750.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(config))),
    )
}

use anyhow::Context;
use eframe::egui;

use cmm_gui::app::CmmApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // The model artifact is process-wide read-only state, loaded once
    // before the UI starts.
    let model = cmm_survival::load_default_model().context("load the survival model artifact")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CMM Prediction Model")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CMM Prediction Model",
        options,
        Box::new(move |cc| {
            let app = CmmApp::new(cc, model)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("run the desktop app: {err}"))
}

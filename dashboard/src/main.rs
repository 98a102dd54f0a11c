use dashboard::app::App;
use dashboard::config::DashboardConfig;
use dashboard::debug;
use dashboard::ui::DashboardWindow;
use dashboard::utils::runtime::TOKIO_RT;

fn main() -> eframe::Result<()> {
    // Held for the whole run; dropping it flushes the log writer.
    let _log_guard = debug::init_logger();

    let config = DashboardConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        DashboardConfig::default()
    });

    // Spawned tasks need a runtime context on the UI thread.
    let _rt = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FX Dashboard")
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FX Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardWindow::new(cc, App::new(config))))),
    )
}

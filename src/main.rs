//! Aranceles - Main Entry Point
//!
//! Native dashboard for Colombian customs tariff management.

use arancel_gui::app::application::run_app;
use arancel_gui::utils::fs::get_or_create_data_dir;

fn main() {
    let env_filter = || {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into())
    };

    // Log to a daily-rotated file in the data directory; fall back to stderr
    // if that directory cannot be created
    let _guard = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "arancel-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(env_filter()).init();
            None
        }
    };

    tracing::info!("Starting Aranceles – Gestión Aduanera...");

    // Run the GPUI application
    run_app();
}

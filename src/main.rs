//! Opsdeck - Main Entry Point

use opsdeck::app::application::run_app;
use opsdeck::utils::config_store;

fn main() {
    // Log to a daily-rolling file in the app data directory; fall back to
    // stderr when that directory cannot be resolved. The guard must stay
    // alive so buffered lines are flushed on exit.
    let env_filter = || {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into())
    };

    let _log_guard = match config_store::app_data_dir() {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "opsdeck.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
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

    tracing::info!("Starting Opsdeck...");

    // Run the GPUI application
    run_app();
}

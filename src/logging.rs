// Centralized logging setup for tracing with runtime log level, file logging, and structured output
use std::env;
use std::fs;
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

pub fn init_logging(service_name: &str) -> eyre::Result<()> {
    // Load log levels for console and file from env
    let console_log_level = env::var("CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let file_log_level = env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());

    // Load file log flag from env
    let log_to_file = env::var("LOG_TO_FILE").unwrap_or_else(|_| "false".to_string()) == "true";

    // Runtime log levels: everything else at "warn", our own crate at the configured level
    let env_filter_console =
        EnvFilter::try_new(format!("warn,sales_dashboard_api={console_log_level}"))
            .unwrap_or_else(|_| EnvFilter::new("sales_dashboard_api=info"));

    let env_filter_file = EnvFilter::try_new(format!("warn,sales_dashboard_api={file_log_level}"))
        .unwrap_or_else(|_| EnvFilter::new("sales_dashboard_api=info"));

    // Console layer: always enabled, pretty human-readable logs
    let console_layer = fmt::Layer::new().pretty().with_filter(env_filter_console);

    if log_to_file {
        // Generate log file path with timestamp
        let log_dir = std::path::Path::new("logs");
        fs::create_dir_all(log_dir)?;
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H:%M:%S");
        let log_file_name = format!("{service_name}_{timestamp}.log");

        let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        FILE_GUARD.set(guard).ok(); // Keep the worker alive for the process lifetime

        // File layer: structured JSON logs with UTC timestamps
        let file_layer = fmt::Layer::new()
            .json()
            .with_writer(non_blocking)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_filter(env_filter_file);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(console_layer).init();
    }

    Ok(())
}

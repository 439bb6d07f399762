use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for a hintforge process: daily-rolling file logs
/// under `~/.hintforge/logs` (overridable via `HINTFORGE_LOG_DIR`), plus an
/// ANSI stderr layer when requested. `RUST_LOG` controls the filter,
/// defaulting to `info`.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_directory();
    let _ = std::fs::create_dir_all(&log_dir);

    // Rolls daily with the component name as prefix, e.g. cli.2026-08-08
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}

fn log_directory() -> PathBuf {
    if let Ok(dir) = std::env::var("HINTFORGE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".hintforge/logs")
}

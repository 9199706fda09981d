// src/logger.rs
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

static GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogSink {
    /// Plain stderr, colored when attached to a terminal.
    Stderr,
    /// Append to a file through a non-blocking writer.
    File(PathBuf),
}

/// Initialize logging once for the whole process.
/// - `filter`: e.g. "fenboard::session=debug,fenboard::board=trace"
///
/// `RUST_LOG`, when set, takes precedence over `filter`.
pub fn init_logging(sink: LogSink, filter: &str) -> Result<(), String> {
    let mut result = Ok(());
    INIT.get_or_init(|| {
        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let builder = fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_line_number(true);

        // Ignore error if someone already set a global subscriber (idempotent for tests)
        match sink {
            LogSink::Stderr => {
                let subscriber = builder
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr)
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
            LogSink::File(path) => {
                if let Some(dir) = path.parent() {
                    let _ = std::fs::create_dir_all(dir);
                }
                let file = match std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                {
                    Ok(f) => f,
                    Err(e) => {
                        result = Err(format!("cannot open log file {}: {}", path.display(), e));
                        return;
                    }
                };

                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                // Keep the guard alive for the program lifetime
                let _ = GUARD.set(guard);

                let subscriber = builder
                    .with_ansi(false) // plain text in files
                    .with_writer(non_blocking)
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
        }
    });
    result
}

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Output layout of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown names fall back to `Compact`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if level.trim().is_empty() { "info" } else { level.trim() };
        EnvFilter::try_new(format!("{level},tower_http=info,axum=info"))
            .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"))
    })
}

/// Initialize the tracing subscriber on stdout.
/// - `RUST_LOG` wins over `level` when set
/// - an unparsable `level` degrades to `info`
/// - repeated calls are no-ops
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter = filter_for(level);
    match format {
        LogFormat::Compact => {
            let _ = fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .compact()
                .with_writer(io::stdout)
                .try_init();
        }
        LogFormat::Json => {
            let _ = fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .json()
                .with_writer(io::stdout)
                .try_init();
        }
    }
}

/// Initialize compact logging at `info`.
pub fn init_logging_default() {
    init_logging("info", LogFormat::Compact);
}

//! Logging setup shared by the nostress binaries
//!
//! Diagnostics always go to stderr so that key material on stdout stays
//! pipeable. Format and level come from `NOSTRESS_LOG_FORMAT` and
//! `NOSTRESS_LOG_LEVEL` unless the binary overrides them (e.g. `--verbose`).

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text (for piping)
    Text,
    /// One JSON object per line
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins over `level` when set. Panics if a subscriber was already
/// installed, so call it once at the top of `main`.
pub fn init(format: LogFormat, level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
}

/// Initialize logging for a CLI invocation
///
/// `--verbose` bumps the default level to debug; environment variables
/// (`NOSTRESS_LOG_FORMAT`, `NOSTRESS_LOG_LEVEL`) still apply otherwise.
pub fn init_cli(verbose: bool) {
    let format = std::env::var("NOSTRESS_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = if verbose {
        "debug".to_string()
    } else {
        std::env::var("NOSTRESS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    };

    init(format, &level);
}

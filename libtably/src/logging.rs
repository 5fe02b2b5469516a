//! Logging configuration shared by Tably binaries
//!
//! Output goes to stderr so it can be redirected away from the terminal UI.
//! Format and level come from `TABLY_LOG_FORMAT` and `TABLY_LOG_LEVEL`.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one object per line)
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json",
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
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String) -> Self {
        Self { format, level }
    }

    /// Initialize logging with the configured settings
    ///
    /// Call once at program start.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
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
                    .with_level(true)
                    .init();
            }
        }
    }
}

/// Initialize logging from `TABLY_LOG_FORMAT` / `TABLY_LOG_LEVEL`,
/// falling back to text format at info level.
pub fn init_default() {
    let format = std::env::var("TABLY_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("TABLY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    LoggingConfig::new(format, level).init();
}

//! Logging setup for the `bish` binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Output is plain `LEVEL message` lines on stderr.
//!
//! # Usage
//!
//! ```rust
//! bish::logger::init_from_env();
//! tracing::info!("parsing {}", "script.bish");
//! ```

use std::env;

use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Environment variable holding the log level name.
pub const LOG_ENV_VAR: &str = "BISH_LOG";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name, ignoring case.
    pub fn from_name(name: &str) -> Option<LogLevel> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Initialize logger with default configuration (INFO level)
pub fn init() {
    init_with_level(LogLevel::Info);
}

/// Initialize logger with the level named by `BISH_LOG`, falling back to INFO.
pub fn init_from_env() {
    let level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|name| LogLevel::from_name(&name))
        .unwrap_or(LogLevel::Info);
    init_with_level(level);
}

/// Initialize logger with a custom level.
///
/// Installing a second global subscriber fails; later calls are ignored.
pub fn init_with_level(level: LogLevel) {
    let filter = LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::from_name("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name(" TRACE "), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_name("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_name("loud"), None);
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Info), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_with_level(LogLevel::Error);
        init();
    }
}

// src/util/log.rs

//! Logger Utility - routes the crate's log macros into `tracing`
use std::sync::OnceLock;
use tracing::Level;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn as_tracing(&self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
        }
    }
}

/// Resolve the most verbose level to emit.
///
/// `DEBUG=true` in the environment turns on debug output even without `-v`.
pub fn max_level(verbose: bool) -> LogLevel {
    let env_debug = *DEBUG_ENABLED.get_or_init(|| {
        std::env::var("DEBUG").unwrap_or_default() == "true"
    });

    if verbose || env_debug {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// Install the global fmt subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let level = max_level(verbose);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.as_tracing())
        .with_target(false)
        .try_init();
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        tracing::error!("{}", format!($($arg)*));
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        tracing::warn!("{}", format!($($arg)*));
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        tracing::info!("{}", format!($($arg)*));
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        tracing::debug!("{}", format!($($arg)*));
    }};
}

#![deny(missing_docs)]
//! Shared logging utilities for the EventEase workspace.
//!
//! This crate provides the `ee_*` logging macros used by the client and the
//! terminal app, plus a minimal test initializer for the global logger.

use log::LevelFilter;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! ee_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "eventease", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! ee_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "eventease", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! ee_info {
    ($($arg:tt)*) => {{
        log::info!(target: "eventease", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! ee_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "eventease", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! ee_error {
    ($($arg:tt)*) => {{
        log::error!(target: "eventease", $($arg)*);
    }};
}

/// Default level for the current build profile: debug in debug builds,
/// info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

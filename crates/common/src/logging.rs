// Stepview - Recorded Execution Trace Viewer
// Copyright (C) 2026 The Stepview Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Logging configuration for stepview components
//!
//! Provides centralized logging setup with:
//! - Structured console output
//! - Optional file logging to a temporary directory
//! - Environment variable support (RUST_LOG)
//! - Default INFO level

use eyre::Result;
use std::{env, fs, path::PathBuf, sync::Once};
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize logging for stepview components
///
/// Sets up console logging with timestamps and, when `enable_file_logging`
/// is set, a daily-rotated log file in a temporary directory. Log levels
/// honor `RUST_LOG`, defaulting to INFO.
///
/// # Arguments
/// * `component_name` - Name of the component (e.g., "stepview")
/// * `enable_file_logging` - Whether to also log to a file
pub fn init_logging(component_name: &str, enable_file_logging: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create environment filter");

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(true);

    if enable_file_logging {
        let log_dir = create_log_directory(component_name)?;

        let file_appender = rolling::daily(&log_dir, format!("{component_name}.log"));
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        // Keep the appender worker alive for the process lifetime
        std::mem::forget(guard);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(LocalTime::rfc_3339())
            .with_ansi(false)
            .with_writer(non_blocking_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {}", e))?;

        tracing::info!(
            component = component_name,
            log_dir = %log_dir.display(),
            "Logging initialized with console and file output"
        );
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {}", e))?;

        tracing::info!(component = component_name, "Logging initialized with console output only");
    }

    Ok(())
}

/// Create log directory in system temp folder
fn create_log_directory(component_name: &str) -> Result<PathBuf> {
    let temp_dir = env::temp_dir();
    let log_dir = temp_dir.join("stepview-logs").join(component_name);

    fs::create_dir_all(&log_dir)?;

    Ok(log_dir)
}

/// Initialize simple logging (console only, compact formatting)
///
/// Useful for tests or simple utilities that don't need the full setup.
///
/// # Arguments
/// * `level` - The default log level to use
pub fn init_simple_logging(level: Level) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .expect("Failed to create environment filter");

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize simple logging: {}", e))?;

    Ok(())
}

// Global test logging initialization - ensures logging is only set up once across all tests
static TEST_LOGGING_INIT: Once = Once::new();

/// Safe logging initialization for tests - can be called multiple times without crashing
///
/// Uses `std::sync::Once` so initialization happens only once per test
/// process, no matter how many tests call it. Console-only output; respects
/// `RUST_LOG`, defaulting to INFO.
pub fn ensure_test_logging(default_level: Option<Level>) {
    TEST_LOGGING_INIT.call_once(|| {
        let default_level = default_level.unwrap_or(Level::INFO);
        let _ = init_simple_logging(default_level);
        // Errors here usually mean a subscriber is already set up, which is
        // fine for tests
    });
}

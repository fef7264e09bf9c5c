//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.tag-overlay/logs/tag-overlay.jsonl) for tooling
//! - **Compact to stderr** for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use tag_overlay_gpui::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init();
//! tracing::info!(event_type = "app_start", "Demo started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "tag-overlay.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// If the log file cannot be opened, only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_dir.join(LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gpui=warn"));

    macro_rules! pretty_layer {
        () => {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .compact()
        };
    }

    let file = OpenOptions::new().create(true).append(true).open(&log_path);

    let file_guard = match file {
        Ok(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let timer = fmt::time::UtcTime::new(time::macros::format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ));
            let json_layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(timer)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .with(pretty_layer!())
                .init();
            Some(guard)
        }
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", log_path.display(), e);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(pretty_layer!())
                .init();
            None
        }
    };

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.tag-overlay/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".tag-overlay").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tag-overlay-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// MOUSE HOVER LOGGING
// =============================================================================

pub fn log_mouse_enter(item_index: usize, tag: Option<&str>) {
    tracing::debug!(
        event_type = "mouse_hover",
        action = "enter",
        item_index = item_index,
        tag = tag.unwrap_or("none"),
        "Mouse enter row {}",
        item_index
    );
}

pub fn log_mouse_leave(item_index: usize, tag: Option<&str>) {
    tracing::debug!(
        event_type = "mouse_hover",
        action = "leave",
        item_index = item_index,
        tag = tag.unwrap_or("none"),
        "Mouse leave row {}",
        item_index
    );
}

// =============================================================================
// OVERLAY STATE LOGGING
// =============================================================================

/// Log a selection change or confirmation
pub fn log_selection(panel: &str, index: Option<usize>, confirmed: bool) {
    tracing::debug!(
        event_type = "selection",
        panel = panel,
        index = ?index,
        confirmed = confirmed,
        "Selection {} on {}",
        if confirmed { "confirmed" } else { "changed" },
        panel
    );
}

/// Log a row list replacement (always resets selection)
pub fn log_list_replaced(panel: &str, previous_len: usize, new_len: usize, failed: bool) {
    tracing::debug!(
        event_type = "list_replaced",
        panel = panel,
        previous_len = previous_len,
        new_len = new_len,
        failed = failed,
        "Rows replaced on {}: {} -> {}",
        panel,
        previous_len,
        new_len
    );
}

/// Log a visibility toggle
pub fn log_visibility(panel: &str, visible: bool, x: f32, y: f32) {
    tracing::debug!(
        event_type = "visibility",
        panel = panel,
        visible = visible,
        anchor_x = x,
        anchor_y = y,
        "{} {}",
        panel,
        if visible { "shown" } else { "hidden" }
    );
}

/// Log a taxonomy/category pair that had no palette entry and fell back to `unknown`
pub fn log_theme_resolved_fallback(taxonomy: &str, category: &str, mode: &str) {
    tracing::trace!(
        event_type = "theme_fallback",
        taxonomy = taxonomy,
        category = category,
        mode = mode,
        "No color for {}/{} in {} mode, using unknown",
        taxonomy,
        category,
        mode
    );
}

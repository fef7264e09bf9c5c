use thiserror::Error;
use tracing::{error, warn};

/// Error severity for host-side display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // informational
    Warning, // recoverable, defaults were used
    Error,   // operation failed
}

/// Domain-specific errors for the tag overlay widgets.
///
/// Nothing on the render path returns these: rendering always degrades to
/// fallback tokens instead. They surface from loading theme/config files,
/// decoding host-supplied JSON, and starting file watchers.
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Theme loading failed for '{path}': {source}")]
    ThemeLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme file '{path}' is not valid JSON: {source}")]
    ThemeParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File watch error: {0}")]
    FileWatch(String),

    #[error("Failed to decode view model: {0}")]
    ViewModel(#[from] serde_json::Error),
}

impl OverlayError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ThemeLoad { .. } => ErrorSeverity::Warning,
            Self::ThemeParse { .. } => ErrorSeverity::Warning,
            Self::InvalidColor(_) => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::FileWatch(_) => ErrorSeverity::Info,
            Self::ViewModel(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ThemeLoad { path, .. } => format!("Could not load theme from {}", path),
            Self::ThemeParse { path, .. } => format!("Theme file {} is malformed", path),
            Self::InvalidColor(value) => format!("'{}' is not a color", value),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::FileWatch(msg) => format!("Theme changes will not auto-reload: {}", msg),
            Self::ViewModel(e) => format!("Invalid tag data: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use tag_overlay_gpui::error::ResultExt;
///
/// let theme = theme::load_theme(&path).log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let err = OverlayError::Config("bad layout".into());
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = OverlayError::FileWatch("no inotify".into());
        assert_eq!(err.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_view_model_error_from_serde() {
        let parse: std::result::Result<Vec<u32>, _> = serde_json::from_str("[1,");
        let err: OverlayError = parse.unwrap_err().into();
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(err.user_message().starts_with("Invalid tag data"));
    }

    #[test]
    fn test_theme_load_message_names_path() {
        let err = OverlayError::ThemeLoad {
            path: "/tmp/theme.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.user_message(), "Could not load theme from /tmp/theme.json");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_result_ext_returns_value_or_none() {
        let ok: std::result::Result<u8, String> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));

        let err: std::result::Result<u8, String> = Err("nope".into());
        assert_eq!(err.warn_on_err(), None);
    }
}

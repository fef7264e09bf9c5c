//! Global theme store and reload service
//!
//! The active [`TagTheme`] is process-wide and read-only from the widgets'
//! point of view: they read it at the start of every render and never cache
//! resolved colors. The service watches the theme file, swaps the store on
//! change and asks gpui to redraw every window.
//!
//! ```rust,ignore
//! theme::service::ensure_theme_service(cx, theme_path);
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use gpui::{App, AsyncApp, Timer};
use parking_lot::RwLock;
use tracing::info;

use super::types::{load_theme, TagTheme};
use crate::error::{OverlayError, ResultExt};
use crate::watcher::ThemeWatcher;

static THEME_STORE: OnceLock<RwLock<Arc<TagTheme>>> = OnceLock::new();

/// Flag to track if the theme service is running
static THEME_SERVICE_RUNNING: AtomicBool = AtomicBool::new(false);

const POLL_INTERVAL: Duration = Duration::from_millis(200);

fn store() -> &'static RwLock<Arc<TagTheme>> {
    THEME_STORE.get_or_init(|| RwLock::new(Arc::new(TagTheme::default())))
}

/// Snapshot of the active theme
pub fn current_theme() -> Arc<TagTheme> {
    store().read().clone()
}

/// Replace the active theme
pub fn set_current_theme(theme: TagTheme) {
    *store().write() = Arc::new(theme);
}

/// Ensure the global theme service is running.
///
/// Idempotent: only one watcher is ever started. A failed reload keeps the
/// previous theme.
pub fn ensure_theme_service(cx: &mut App, theme_path: PathBuf) {
    if THEME_SERVICE_RUNNING.swap(true, Ordering::SeqCst) {
        return;
    }

    info!(path = %theme_path.display(), "Starting global theme service");

    cx.spawn(async move |cx: &mut AsyncApp| {
        let (mut watcher, rx) = ThemeWatcher::new(theme_path.clone());

        let started = watcher
            .start()
            .map_err(|e| OverlayError::FileWatch(e.to_string()))
            .warn_on_err();
        if started.is_none() {
            THEME_SERVICE_RUNNING.store(false, Ordering::SeqCst);
            return;
        }

        loop {
            Timer::after(POLL_INTERVAL).await;

            if rx.try_recv().is_ok() {
                if let Some(theme) = load_theme(&theme_path).warn_on_err() {
                    set_current_theme(theme);
                    info!("Theme changed, refreshing windows");
                }

                if cx.update(|cx| cx.refresh_windows()).is_err() {
                    info!("App context gone, stopping theme service");
                    break;
                }
            }
        }

        THEME_SERVICE_RUNNING.store(false, Ordering::SeqCst);
    })
    .detach();
}

/// Check if the theme service is currently running.
pub fn is_theme_service_running() -> bool {
    THEME_SERVICE_RUNNING.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn test_theme_service_flag() {
        THEME_SERVICE_RUNNING.store(false, Ordering::SeqCst);
        assert!(!is_theme_service_running());

        THEME_SERVICE_RUNNING.store(true, Ordering::SeqCst);
        assert!(is_theme_service_running());

        THEME_SERVICE_RUNNING.store(false, Ordering::SeqCst);
    }

    #[test]
    fn test_store_swap_is_visible_to_new_snapshots() {
        let before = current_theme();
        let mut changed = TagTheme::default();
        changed.dark.disabled = 0x123456;
        set_current_theme(changed);

        assert_eq!(current_theme().tokens(ThemeMode::Dark).disabled, 0x123456);
        // Earlier snapshots are unaffected
        assert_ne!(before.tokens(ThemeMode::Dark).disabled, 0x123456);

        set_current_theme(TagTheme::default());
    }
}

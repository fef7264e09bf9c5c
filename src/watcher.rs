//! Theme file watcher
//!
//! Watches the directory containing the theme file and emits a debounced
//! [`ThemeReloadEvent`] whenever the file is created or modified.

use notify::{recommended_watcher, RecursiveMode, Result as NotifyResult, Watcher};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

/// Editors often write a file in several steps; coalesce them
const DEBOUNCE: Duration = Duration::from_millis(500);

/// How often the watch loop checks for shutdown
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Event emitted when the theme needs to be reloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeReloadEvent {
    Reload,
}

/// Watches one theme file and emits reload events
pub struct ThemeWatcher {
    path: PathBuf,
    tx: Option<Sender<ThemeReloadEvent>>,
    stop: Arc<AtomicBool>,
    watcher_thread: Option<thread::JoinHandle<()>>,
}

impl ThemeWatcher {
    /// Returns the watcher and the receiver its reload events arrive on
    pub fn new(path: impl Into<PathBuf>) -> (Self, Receiver<ThemeReloadEvent>) {
        let (tx, rx) = channel();
        let watcher = ThemeWatcher {
            path: path.into(),
            tx: Some(tx),
            stop: Arc::new(AtomicBool::new(false)),
            watcher_thread: None,
        };
        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Spawn the background watch thread
    pub fn start(&mut self) -> NotifyResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| std::io::Error::other("watcher already started"))?;
        let path = self.path.clone();
        let stop = self.stop.clone();

        let thread_handle = thread::spawn(move || {
            if let Err(e) = Self::watch_loop(&path, tx, stop) {
                warn!(error = %e, watcher = "theme", "Theme watcher error");
            }
        });

        self.watcher_thread = Some(thread_handle);
        Ok(())
    }

    fn watch_loop(
        theme_path: &Path,
        tx: Sender<ThemeReloadEvent>,
        stop: Arc<AtomicBool>,
    ) -> NotifyResult<()> {
        let watch_path = theme_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = theme_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let debounce_active = Arc::new(Mutex::new(false));
        let (watch_tx, watch_rx) = channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<notify::Event>| {
            let _ = watch_tx.send(res);
        })?;
        watcher.watch(watch_path, RecursiveMode::NonRecursive)?;

        info!(
            path = %watch_path.display(),
            target = file_name.as_str(),
            "Theme watcher started"
        );

        while !stop.load(Ordering::SeqCst) {
            match watch_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(event)) => {
                    if !is_theme_event(&event, &file_name) {
                        continue;
                    }

                    let mut debounce = debounce_active.lock();
                    if *debounce {
                        continue;
                    }
                    *debounce = true;
                    drop(debounce);

                    let tx = tx.clone();
                    let debounce_flag = debounce_active.clone();
                    let file_name = file_name.clone();
                    thread::spawn(move || {
                        thread::sleep(DEBOUNCE);
                        let _ = tx.send(ThemeReloadEvent::Reload);
                        *debounce_flag.lock() = false;
                        info!(
                            file = file_name.as_str(),
                            "Theme file changed, emitting reload event"
                        );
                    });
                }
                Ok(Err(e)) => {
                    warn!(error = %e, watcher = "theme", "File watcher error");
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        info!(watcher = "theme", "Theme watcher shutting down");
        Ok(())
    }
}

impl Drop for ThemeWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.watcher_thread.take() {
            let _ = handle.join();
        }
    }
}

/// Create/modify events that touch the watched file name
fn is_theme_event(event: &notify::Event, file_name: &str) -> bool {
    let touches_file = event.paths.iter().any(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name == file_name)
            .unwrap_or(false)
    });
    touches_file
        && matches!(
            event.kind,
            notify::EventKind::Create(_) | notify::EventKind::Modify(_)
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use notify::{Event, EventKind};

    #[test]
    fn test_theme_watcher_creation() {
        let (watcher, _rx) = ThemeWatcher::new("/tmp/tag-overlay/theme.json");
        assert_eq!(watcher.path(), Path::new("/tmp/tag-overlay/theme.json"));
    }

    #[test]
    fn test_start_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (mut watcher, _rx) = ThemeWatcher::new(dir.path().join("theme.json"));
        watcher.start().unwrap();
        assert!(watcher.start().is_err());
    }

    #[test]
    fn test_is_theme_event_filters_by_name_and_kind() {
        let modify = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/x/theme.json"));
        assert!(is_theme_event(&modify, "theme.json"));

        let create = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/x/theme.json"));
        assert!(is_theme_event(&create, "theme.json"));

        let other_file = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/x/config.json"));
        assert!(!is_theme_event(&other_file, "theme.json"));

        let removed = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("/x/theme.json"));
        assert!(!is_theme_event(&removed, "theme.json"));
    }
}

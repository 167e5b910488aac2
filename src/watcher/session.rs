//! Watch session state machine
//!
//! Tracks the fixed set of watched folders and a single scan gate: events
//! delivered before the initial enumeration completes belong to the
//! watcher's own startup scan and must not trigger rebuilds. The gate
//! transitions exactly once and never resets.

use std::path::{Path, PathBuf};

use super::event::FsEventKind;

/// Long-lived watch state for one process lifetime
pub struct WatchSession {
    roots: Vec<PathBuf>,
    scan_complete: bool,
}

impl WatchSession {
    /// Create a session over the resolved source folders.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            scan_complete: false,
        }
    }

    /// The watched folders, fixed for the session's lifetime
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Whether the initial scan has completed
    pub fn is_ready(&self) -> bool {
        self.scan_complete
    }

    /// Mark the initial scan complete. Returns `true` only on the first
    /// call; the transition fires once.
    pub fn complete_initial_scan(&mut self) -> bool {
        if self.scan_complete {
            return false;
        }
        self.scan_complete = true;
        true
    }

    /// Decide whether a filesystem event should trigger a rebuild.
    ///
    /// Add, change, and remove all qualify; events arriving before the
    /// scan gate opens are suppressed, as are paths with a dotted
    /// component below a watched root.
    pub fn on_filesystem_event(&mut self, _kind: FsEventKind, path: &Path) -> bool {
        if !self.scan_complete {
            return false;
        }

        let relative = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);

        !is_hidden(relative)
    }
}

/// A path is hidden when any of its components starts with `.`
fn is_hidden(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
    })
}

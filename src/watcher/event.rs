//! Watch event types

/// Filesystem event kinds the watch session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEventKind {
    Added,
    Changed,
    Removed,
}

/// Watch events for console/NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        sources: Vec<String>,
        output: String,
    },
    BuildStarted {
        output: String,
        rebuild: bool,
    },
    BuildComplete {
        bytes: usize,
        elapsed_ms: u64,
        timestamp: String,
        rebuild: bool,
    },
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

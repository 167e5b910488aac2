//! File watcher for continuous combining
//!
//! Implements the `run` command:
//! - Recursive watch over every configured source folder
//! - Scan gate: startup enumeration never triggers a rebuild
//! - One full blocking build per post-startup add/change/remove
//! - NDJSON output for CI

mod event;
mod run;
mod session;

pub use event::{FsEventKind, WatchEvent};
pub use run::watch;
pub use session::WatchSession;

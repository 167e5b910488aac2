//! Mimoto - template combine and watch toolkit
//!
//! Mimoto projects keep their HTML templates as small fragments spread over
//! source folders and installed component packages. This crate collects
//! those fragments, merges them in a deterministic order, and writes one
//! combined output file - once, or continuously under a filesystem watch.

pub mod combine;
pub mod config;
pub mod error;
pub mod watcher;

// Re-exports for convenience
pub use combine::{collect_html_files, BuildResult, CombineEngine};
pub use config::{CombineOptions, Config, CONFIG_FILE};
pub use error::{MimotoError, MimotoResult};
pub use watcher::{watch, FsEventKind, WatchEvent, WatchSession};

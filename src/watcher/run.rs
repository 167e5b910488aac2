//! Watch run loop
//!
//! Registers a recursive `notify` watch over every source folder, drains
//! the startup enumeration, runs the initial build, then runs one full
//! blocking build per qualifying event. Builds are fully synchronous, so
//! event delivery order gives a strict total order of builds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::combine::CombineEngine;
use crate::error::MimotoResult;

use super::event::{FsEventKind, WatchEvent};
use super::session::WatchSession;

/// How long to drain the watcher's own startup enumeration before the
/// session is marked ready. notify can deliver events for pre-existing
/// files right after registration.
const SCAN_WINDOW_MS: u64 = 500;

/// Channel poll interval while watching
const POLL_INTERVAL_MS: u64 = 50;

/// Combine once, then keep watching until `running` is cleared.
///
/// Fatal build errors (unwritable output, unreadable source tree) are
/// reported through the callback and returned; the caller decides exit
/// behavior.
pub fn watch(
    engine: &CombineEngine,
    running: Arc<AtomicBool>,
    on_event: impl Fn(WatchEvent),
) -> MimotoResult<()> {
    let options = engine.options();
    let mut session = WatchSession::new(options.source_roots());

    on_event(WatchEvent::WatchStarted {
        sources: options.sources.clone(),
        output: options.output.clone(),
    });
    for warning in engine.warnings() {
        on_event(WatchEvent::Warning {
            message: warning.clone(),
        });
    }

    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                if let Some(kind) = map_event_kind(&event.kind) {
                    for path in event.paths {
                        let _ = tx.send((kind, path));
                    }
                }
            }
        },
        NotifyConfig::default(),
    )?;

    for root in session.roots() {
        watcher.watch(root, RecursiveMode::Recursive)?;
    }

    // Drain startup events, then open the scan gate and run the first build.
    let scan_end = Instant::now() + Duration::from_millis(SCAN_WINDOW_MS);
    while Instant::now() < scan_end {
        let _ = rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS));
    }
    session.complete_initial_scan();

    do_combine(engine, false, &on_event)?;

    while running.load(Ordering::SeqCst) {
        if let Ok((kind, path)) = rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
            if session.on_filesystem_event(kind, &path) {
                do_combine(engine, true, &on_event)?;
            }
        }
    }

    on_event(WatchEvent::Shutdown);
    Ok(())
}

fn map_event_kind(kind: &EventKind) -> Option<FsEventKind> {
    match kind {
        EventKind::Create(_) => Some(FsEventKind::Added),
        EventKind::Modify(_) => Some(FsEventKind::Changed),
        EventKind::Remove(_) => Some(FsEventKind::Removed),
        _ => None,
    }
}

/// Run one combine pass and report it through the callback.
fn do_combine(
    engine: &CombineEngine,
    rebuild: bool,
    on_event: &impl Fn(WatchEvent),
) -> MimotoResult<()> {
    on_event(WatchEvent::BuildStarted {
        output: engine.options().output.clone(),
        rebuild,
    });

    match engine.combine(rebuild) {
        Ok(result) => {
            on_event(WatchEvent::BuildComplete {
                bytes: result.bytes_written,
                elapsed_ms: result.elapsed_ms,
                timestamp: result.timestamp,
                rebuild,
            });
            Ok(())
        }
        Err(e) => {
            on_event(WatchEvent::Error {
                message: e.to_string(),
            });
            Err(e)
        }
    }
}

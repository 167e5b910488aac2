//! Combine engine
//!
//! Runs one "build": component fragments first (loaded once at
//! construction), then the collected fragments from each configured source
//! folder in order, joined with a single newline and written atomically to
//! the output file. Every build re-reads the source folders from disk;
//! component fragments are reused unchanged across rebuilds.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use chrono::Local;

use crate::combine::collector::collect_html_files;
use crate::combine::components::load_components;
use crate::config::CombineOptions;
use crate::error::{MimotoError, MimotoResult};

/// Outcome of a single combine pass
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Size of the combined output in bytes
    pub bytes_written: usize,
    /// Wall-clock duration of the pass
    pub elapsed_ms: u64,
    /// Local completion time, `YYYY.MM.DD HH:MM:SS`
    pub timestamp: String,
    /// Whether this pass was triggered by a watch event
    pub rebuild: bool,
}

/// The combine engine. Holds the validated options and the component
/// fragments preloaded at construction time.
#[derive(Debug)]
pub struct CombineEngine {
    options: CombineOptions,
    core_fragments: Vec<String>,
    warnings: Vec<String>,
}

impl CombineEngine {
    /// Create an engine, loading all configured component fragments.
    ///
    /// A package whose root cannot be resolved is skipped with a warning;
    /// a missing component file aborts construction.
    pub fn new(options: CombineOptions) -> MimotoResult<Self> {
        let mut core_fragments = Vec::new();
        let mut warnings = Vec::new();

        for (package, components) in &options.components {
            match load_components(package, components, &options.project_root) {
                Ok(fragments) => core_fragments.extend(fragments),
                Err(err) if err.is_warning() => warnings.push(err.to_string()),
                Err(err) => return Err(err),
            }
        }

        Ok(Self {
            options,
            core_fragments,
            warnings,
        })
    }

    /// Warnings collected while loading components (skipped packages)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Options the engine was constructed with
    pub fn options(&self) -> &CombineOptions {
        &self.options
    }

    /// Run one combine pass. `is_rebuild` is carried through to the result
    /// for reporting; it does not change the algorithm.
    pub fn combine(&self, is_rebuild: bool) -> MimotoResult<BuildResult> {
        let start = Instant::now();

        let mut fragments = self.core_fragments.clone();
        for root in self.options.source_roots() {
            fragments.extend(collect_html_files(&root)?);
        }

        let html = fragments.join("\n");
        let output_path = self.options.output_path();

        write_output(&output_path, &html).map_err(|source| MimotoError::OutputWrite {
            path: output_path.clone(),
            source,
        })?;

        Ok(BuildResult {
            bytes_written: html.len(),
            elapsed_ms: start.elapsed().as_millis() as u64,
            timestamp: Local::now().format("%Y.%m.%d %H:%M:%S").to_string(),
            rebuild: is_rebuild,
        })
    }
}

/// Write `contents` to `path` atomically (tempfile + rename), creating
/// parent directories as needed.
fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

//! Template combining
//!
//! Collects `.html` fragments from configured source folders, merges them
//! with package-sourced component fragments, and writes the concatenated
//! result to a single output file.

mod collector;
mod components;
mod engine;

pub use collector::collect_html_files;
pub use components::{find_package_root, load_components, rename_registration, REGISTER_ATTRIBUTE};
pub use engine::{BuildResult, CombineEngine};

//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Write `mimoto.config.json` into the project root.
pub fn write_config(root: &Path, config: &str) {
    fs::write(root.join("mimoto.config.json"), config).unwrap();
}

/// Write a file at a path relative to the project root, creating parents.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A fake installed npm package: drops `package.json` at the root and the
/// component file under `node_modules/<package>/`.
pub fn write_package_component(root: &Path, package: &str, relative: &str, content: &str) {
    fs::write(root.join("package.json"), "{}").unwrap();
    write_file(
        root,
        &format!("node_modules/{package}/{relative}"),
        content,
    );
}

//! Component directory loader
//!
//! Components are named HTML fragments that live inside an installed npm
//! package. Each fragment is loaded once at engine startup and its
//! `data-mimoto-register` attribute is rewritten to the logical component
//! name, so one physical file can be registered under many names.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{MimotoError, MimotoResult};

/// Registration attribute rewritten to carry the logical component name
pub const REGISTER_ATTRIBUTE: &str = "data-mimoto-register";

/// Package manifest file that marks a package root
const PACKAGE_MANIFEST: &str = "package.json";

/// Walk upward from `start_dir` until a directory containing `package.json`
/// is found. Returns `None` when the filesystem root is reached first.
pub fn find_package_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        if current.join(PACKAGE_MANIFEST).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the named component fragments from `package`, in mapping order.
///
/// The package is located under `<package root>/node_modules/<package>`,
/// where the package root is found by walking up from `start_dir`. A
/// missing package root yields [`MimotoError::PackageRootNotFound`], which
/// callers downgrade to a warning; a missing component file yields
/// [`MimotoError::MissingComponent`], which is fatal. The asymmetry matches
/// observed behavior and is deliberate — see DESIGN.md.
pub fn load_components(
    package: &str,
    components: &IndexMap<String, String>,
    start_dir: &Path,
) -> MimotoResult<Vec<String>> {
    let package_root =
        find_package_root(start_dir).ok_or_else(|| MimotoError::PackageRootNotFound {
            package: package.to_string(),
        })?;

    let package_dir = package_root.join("node_modules").join(package);

    let mut fragments = Vec::with_capacity(components.len());
    for (name, relative_path) in components {
        let path = with_html_extension(package_dir.join(relative_path));

        if !path.is_file() {
            return Err(MimotoError::MissingComponent { path });
        }

        let html = fs::read_to_string(&path)?;
        fragments.push(rename_registration(&html, name));
    }

    Ok(fragments)
}

/// Append `.html` unless the path already ends in it.
fn with_html_extension(path: PathBuf) -> PathBuf {
    if path.extension().map(|ext| ext == "html").unwrap_or(false) {
        return path;
    }
    let mut os: OsString = path.into_os_string();
    os.push(".html");
    PathBuf::from(os)
}

/// Replace the value of every `data-mimoto-register="…"` attribute with
/// `name`. Occurrences without a closing quote are left untouched, matching
/// the attribute pattern exactly.
pub fn rename_registration(html: &str, name: &str) -> String {
    let needle = format!("{REGISTER_ATTRIBUTE}=\"");
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(idx) = rest.find(&needle) {
        let value_start = idx + needle.len();
        match rest[value_start..].find('"') {
            Some(close) => {
                out.push_str(&rest[..value_start]);
                out.push_str(name);
                rest = &rest[value_start + close..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

//! Recursive template collector
//!
//! Walks a source folder depth-first and returns the contents of every
//! `.html` file beneath it, in traversal order. Entries within a directory
//! are visited in whatever order the directory listing returns them; no
//! sort is applied.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MimotoResult;

/// Collect the contents of all `.html` files under `root`, depth-first.
///
/// Uses an explicit work list rather than call-stack recursion, so deeply
/// nested trees cannot exhaust the stack. Extension matching is
/// case-sensitive; everything that is not an `.html` file is skipped.
/// Read failures abort the current build attempt.
pub fn collect_html_files(root: &Path) -> MimotoResult<Vec<String>> {
    let mut fragments = Vec::new();
    let mut work: Vec<(PathBuf, bool)> = vec![(root.to_path_buf(), true)];

    while let Some((path, is_dir)) = work.pop() {
        if is_dir {
            let mut entries = Vec::new();
            for entry in fs::read_dir(&path)? {
                let entry = entry?;
                let file_type = entry.file_type()?;
                entries.push((entry.path(), file_type.is_dir()));
            }
            // Reverse before pushing so the stack pops in listing order,
            // matching a plain depth-first recursion.
            for item in entries.into_iter().rev() {
                work.push(item);
            }
        } else if path.extension().map(|ext| ext == "html").unwrap_or(false) {
            fragments.push(fs::read_to_string(&path)?);
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collects_html_at_arbitrary_depth() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("top.html"), "<p>top</p>").unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/one.html"), "<p>one</p>").unwrap();
        fs::write(dir.path().join("a/b/c/deep.html"), "<p>deep</p>").unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments.len(), 3);
        assert!(fragments.contains(&"<p>top</p>".to_string()));
        assert!(fragments.contains(&"<p>one</p>".to_string()));
        assert!(fragments.contains(&"<p>deep</p>".to_string()));
    }

    #[test]
    fn test_skips_non_html_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.html"), "<p>keep</p>").unwrap();
        fs::write(dir.path().join("skip.css"), "body {}").unwrap();
        fs::write(dir.path().join("skip.js"), "let x;").unwrap();
        fs::write(dir.path().join("skip.htm"), "<p>nope</p>").unwrap();
        fs::write(dir.path().join("no_extension"), "plain").unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments, vec!["<p>keep</p>".to_string()]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("lower.html"), "<p>lower</p>").unwrap();
        fs::write(dir.path().join("upper.HTML"), "<p>upper</p>").unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments, vec!["<p>lower</p>".to_string()]);
    }

    #[test]
    fn test_dotfiles_are_not_excluded_here() {
        // Dotfile filtering belongs to the watcher, not the collector.
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.html"), "<p>hidden</p>").unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments, vec!["<p>hidden</p>".to_string()]);
    }

    #[test]
    fn test_contents_are_returned_unmodified() {
        let dir = tempdir().unwrap();
        let raw = "  <p>\n  padded\n</p>\n\n";
        fs::write(dir.path().join("raw.html"), raw).unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments, vec![raw.to_string()]);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let result = collect_html_files(&dir.path().join("does-not-exist"));
        assert!(result.is_err());
    }

    #[test]
    fn test_deeply_nested_tree_does_not_overflow() {
        let dir = tempdir().unwrap();
        let mut path = dir.path().to_path_buf();
        for i in 0..200 {
            path = path.join(format!("level{i}"));
        }
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("leaf.html"), "<p>leaf</p>").unwrap();

        let fragments = collect_html_files(dir.path()).unwrap();

        assert_eq!(fragments, vec!["<p>leaf</p>".to_string()]);
    }
}

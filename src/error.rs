//! Error types for Mimoto
//!
//! Uses `thiserror` for library errors. The library never terminates the
//! process; the CLI entry point alone maps errors to exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mimoto operations
pub type MimotoResult<T> = Result<T, MimotoError>;

/// Main error type for Mimoto operations
#[derive(Error, Debug)]
pub enum MimotoError {
    /// Config file missing from the project root
    #[error("missing config file {path} in project root")]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but is not valid JSON
    #[error("invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// `combine.sources` absent or empty
    #[error("please add source folders to combine.sources = [] in mimoto.config.json")]
    MissingSources,

    /// `combine.output` absent or empty
    #[error("please set the output file in combine.output = \"\" in mimoto.config.json")]
    MissingOutput,

    /// A named component maps to a file that does not exist
    #[error("component file not found: {path}")]
    MissingComponent { path: PathBuf },

    /// No package manifest found walking up from the working directory
    #[error("package root not found: unable to reach node_modules for package '{package}'")]
    PackageRootNotFound { package: String },

    /// Combined output could not be written
    #[error("could not write to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Watch registration or delivery error
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl MimotoError {
    /// True for conditions the engine reports and continues past.
    pub fn is_warning(&self) -> bool {
        matches!(self, MimotoError::PackageRootNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_missing_component() {
        let err = MimotoError::MissingComponent {
            path: PathBuf::from("node_modules/pkg/widgets/card.html"),
        };
        assert_eq!(
            err.to_string(),
            "component file not found: node_modules/pkg/widgets/card.html"
        );
    }

    #[test]
    fn test_error_display_missing_sources() {
        let err = MimotoError::MissingSources;
        assert!(err.to_string().contains("combine.sources"));
    }

    #[test]
    fn test_package_root_not_found_is_warning() {
        let err = MimotoError::PackageRootNotFound {
            package: "mimoto-components".to_string(),
        };
        assert!(err.is_warning());
        assert!(!MimotoError::MissingOutput.is_warning());
    }
}

use std::path::PathBuf;

/// Action error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Both an explicit version and pyproject-based resolution requested
    #[error("'version' and 'use_pyproject' inputs are mutually exclusive.")]
    VersionConflict,

    /// Manifest-based resolution requested but no pyproject.toml exists
    #[error("'use_pyproject' input requires a pyproject.toml file.")]
    ManifestMissing { path: PathBuf },

    /// pyproject.toml exists but could not be read or parsed
    #[error("failed to read {}: {}", .path.display(), .message)]
    Manifest { path: PathBuf, message: String },

    /// No ruff entry in any dependency array
    #[error("'ruff' dependency missing from pyproject.toml.")]
    DependencyMissing,

    /// ruff is declared as a dependency without a version constraint
    #[error("Version specifier missing for 'ruff' dependency in pyproject.toml.")]
    SpecifierMissing,

    /// The changed-files input is enabled with an empty file list
    #[error("'changed_files' input is enabled but no files were provided.")]
    NoChangedFiles,

    /// pip exited non-zero while installing ruff
    #[error("Failed to install 'ruff'.")]
    InstallFailed { code: i32 },

    /// A subprocess could not be launched at all
    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using the action Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    ///
    /// Install failures mirror pip's own exit code. The empty changed-files
    /// precondition is annotated but exits zero, so a pull request touching
    /// no lintable files does not fail the workflow.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoChangedFiles => 0,
            Error::InstallFailed { code } => *code,
            Error::VersionConflict
            | Error::ManifestMissing { .. }
            | Error::Manifest { .. }
            | Error::DependencyMissing
            | Error::SpecifierMissing
            | Error::Spawn { .. } => 1,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

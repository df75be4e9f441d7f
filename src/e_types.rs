use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single reportable build error.
///
/// Records come from three places: a parsed compiler diagnostic block, the
/// build-plan failure short-circuit, or a missing build executable.
///
/// # Fields
/// - `file`: Path of the offending source file (or the project's `package.yaml`).
/// - `line`: 1-based line number, `0` for build-plan failures, `-1` when stack could not be run.
/// - `column`: 1-based column number, with the same sentinels as `line`.
/// - `details`: Continuation lines of the diagnostic. Left unset (and omitted from JSON)
///   when the record has no diagnostic body at all.
/// - `extras`: The message text that followed the diagnostic header.
///
/// # Example
/// ```
/// use stackrunner::BuildError;
///
/// let err = BuildError::build_plan_failure(std::path::Path::new("/proj"), "\nIn the dependencies for foo:");
/// assert_eq!(err.line, 0);
/// assert!(err.file.ends_with("/package.yaml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildError {
    pub file: String,
    pub line: i64,
    pub column: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    pub extras: String,
}

impl BuildError {
    /// Synthetic record for a dependency resolution failure, pointing at the
    /// project's `package.yaml`.
    pub fn build_plan_failure(project: &Path, detail: &str) -> Self {
        BuildError {
            file: project.join("package.yaml").to_string_lossy().into_owned(),
            line: 0,
            column: 0,
            details: Some(detail.split('\n').map(str::to_string).collect()),
            extras: String::new(),
        }
    }

    /// Synthetic record for a build executable that could not be found.
    pub fn executable_missing(message: &str) -> Self {
        BuildError {
            file: String::new(),
            line: -1,
            column: -1,
            details: None,
            extras: message.trim().to_string(),
        }
    }
}

/// How the build process finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Exit status zero. Nothing to report.
    Succeeded,
    /// Non-zero exit (or killed by a signal, in which case `code` is `None`).
    Failed { code: Option<i32>, stderr: String },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded)
    }
}

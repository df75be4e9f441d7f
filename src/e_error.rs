use std::path::PathBuf;
use thiserror::Error;

/// Failures to run the build at all, as opposed to a build that ran and failed.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("project directory {} does not exist or is not a directory", path.display())]
    ProjectDir { path: PathBuf },

    #[error("\"{program}\": executable file not found in $PATH")]
    ExecutableNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    pub fn is_executable_missing(&self) -> bool {
        matches!(self, RunnerError::ExecutableNotFound { .. })
    }
}

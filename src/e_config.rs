use crate::e_cli::Cli;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the build executable.
pub const STACK_ENV: &str = "STACKRUNNER_STACK";

/// Executable used when nothing else is configured.
pub const DEFAULT_STACK: &str = "stack";

/// Everything the runner needs to invoke one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Project root; the build runs with this as its working directory.
    pub project_dir: PathBuf,
    /// Build executable, resolved on `PATH` before spawning.
    pub program: String,
    /// Appended to `stack build --fast --verbose`.
    pub extra_args: Vec<String>,
}

impl RunnerConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        RunnerConfig {
            project_dir: project_dir.into(),
            program: DEFAULT_STACK.to_string(),
            extra_args: Vec::new(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        RunnerConfig {
            project_dir: cli.path.clone(),
            program: resolve_program(cli.stack.as_deref(), env::var(STACK_ENV).ok()),
            extra_args: cli.extra.clone(),
        }
    }
}

/// Picks the build executable: explicit flag, then environment, then `stack`.
/// Blank values are ignored.
pub fn resolve_program(flag: Option<&str>, env_value: Option<String>) -> String {
    flag.map(str::to_string)
        .into_iter()
        .chain(env_value)
        .find(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STACK.to_string())
}

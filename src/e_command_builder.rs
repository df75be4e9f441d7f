use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A builder that constructs the `stack build` invocation for a project.
#[derive(Debug, Clone)]
pub struct StackCommandBuilder {
    program: OsString,
    args: Vec<String>,
    execution_dir: Option<PathBuf>,
}

impl StackCommandBuilder {
    /// Creates a builder for `program` with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        StackCommandBuilder {
            program: program.into(),
            args: Vec::new(),
            execution_dir: None,
        }
    }

    /// Adds `build --fast --verbose`. Verbose output is what tags GHC's
    /// messages with `[warn]`, so the parser depends on it.
    pub fn with_build_defaults(mut self) -> Self {
        self.args.push("build".into());
        self.args.push("--fast".into());
        self.args.push("--verbose".into());
        self
    }

    /// Appends extra arguments to the command.
    pub fn with_extra_args(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }

    /// Runs the command from `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.execution_dir = Some(dir.to_path_buf());
        self
    }

    /// Builds the final vector of command-line arguments.
    pub fn build(self) -> Vec<String> {
        self.args
    }

    /// Human readable form of the command, for logs.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Builds a std::process::Command with both output streams piped.
    pub fn build_command(self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = self.execution_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

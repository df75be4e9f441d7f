use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

pub const COMPILE_LOG: &str = include_str!("../fixtures/compile_error.log");
pub const BUILD_PLAN_LOG: &str = include_str!("../fixtures/build_plan_error.log");
pub const MULTIPLE_ERRORS_LOG: &str = include_str!("../fixtures/multiple_errors.log");

/// A wrapper around a temporary stack project directory.
pub struct TestProject {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// The root directory for the generated project.
    pub root: PathBuf,
}

impl TestProject {
    /// Create a new project with the given name and a minimal `stack.yaml`.
    pub fn new(project_name: &str) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path().join(project_name);
        fs::create_dir_all(&root)?;
        fs::write(root.join("stack.yaml"), "resolver: lts-22.0\npackages:\n- .\n")?;
        Ok(TestProject { temp_dir, root })
    }

    /// Returns a reference to the project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Where the fake stack records the arguments it was called with.
    pub fn args_file(&self) -> PathBuf {
        self.temp_dir.path().join("stack-args.txt")
    }

    /// Installs a fake `stack` executable outside the project that writes
    /// `stderr` to its standard error and exits with `exit_code`.
    /// Returns the path of the script.
    #[cfg(unix)]
    pub fn fake_stack(&self, stderr: &str, exit_code: i32) -> IoResult<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir)?;
        let log = bin_dir.join("stderr.log");
        fs::write(&log, stderr)?;

        let script = bin_dir.join("stack");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\npwd > '{cwd}'\necho \"$@\" > '{args}'\ncat '{log}' >&2\nexit {code}\n",
                cwd = self.temp_dir.path().join("stack-cwd.txt").display(),
                args = self.args_file().display(),
                log = log.display(),
                code = exit_code
            ),
        )?;
        let mut perms = fs::metadata(&script)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms)?;
        Ok(script)
    }

    /// The working directory the fake stack was started in.
    pub fn recorded_cwd(&self) -> IoResult<String> {
        Ok(fs::read_to_string(self.temp_dir.path().join("stack-cwd.txt"))?
            .trim()
            .to_string())
    }

    /// The arguments the fake stack was started with.
    pub fn recorded_args(&self) -> IoResult<String> {
        Ok(fs::read_to_string(self.args_file())?.trim().to_string())
    }
}

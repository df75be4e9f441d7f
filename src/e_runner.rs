use crate::e_command_builder::StackCommandBuilder;
use crate::e_config::RunnerConfig;
use crate::e_error::RunnerError;
use crate::e_types::BuildOutcome;
use log::{debug, info, warn};
use std::path::Path;
use which::which;

/// Files that mark a directory as a stack project.
pub const PROJECT_FILES: [&str; 2] = ["stack.yaml", "package.yaml"];

/// Returns true if `dir` contains `stack.yaml` or `package.yaml`.
pub fn looks_like_stack_project(dir: &Path) -> bool {
    PROJECT_FILES.iter().any(|name| dir.join(name).is_file())
}

/// Runs `stack build --fast --verbose` in the configured project and waits
/// for it to finish.
///
/// A build that runs and fails is not an error here; it comes back as
/// [`BuildOutcome::Failed`] carrying the captured stderr.
pub fn run_stack(config: &RunnerConfig) -> Result<BuildOutcome, RunnerError> {
    let dir = &config.project_dir;
    if !dir.is_dir() {
        return Err(RunnerError::ProjectDir { path: dir.clone() });
    }
    if !looks_like_stack_project(dir) {
        warn!(
            "{} has neither stack.yaml nor package.yaml; running stack anyway",
            dir.display()
        );
    }

    let program = which(&config.program).map_err(|source| RunnerError::ExecutableNotFound {
        program: config.program.clone(),
        source,
    })?;
    debug!("Resolved {} to {}", config.program, program.display());

    let builder = StackCommandBuilder::new(program)
        .with_build_defaults()
        .with_extra_args(&config.extra_args)
        .in_dir(dir);
    info!("Running: {} (in {})", builder.display(), dir.display());

    let output = builder
        .build_command()
        .output()
        .map_err(|source| RunnerError::Spawn {
            program: config.program.clone(),
            source,
        })?;
    debug!(
        "Captured {} byte(s) of stdout, {} byte(s) of stderr",
        output.stdout.len(),
        output.stderr.len()
    );

    if output.status.success() {
        Ok(BuildOutcome::Succeeded)
    } else {
        Ok(BuildOutcome::Failed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

//! Turns a finished build into the list of errors reported to the editor.

use crate::e_buildplan::find_build_plan_failure;
use crate::e_filter::filter_diagnostic_lines;
use crate::e_parser::parse_error_blocks;
use crate::e_types::{BuildError, BuildOutcome};
use crate::e_unfold::unfold_error_lines;
use log::{debug, info};
use std::path::Path;

/// Compiles every pattern used by the pipeline so a broken one panics at
/// startup instead of halfway through a report.
pub fn compile_patterns() {
    once_cell::sync::Lazy::force(&crate::e_filter::DIAGNOSTIC_LINE);
    once_cell::sync::Lazy::force(&crate::e_unfold::SEPARATOR_LINE);
    once_cell::sync::Lazy::force(&crate::e_parser::ERROR_HEADER);
}

/// Collects the build errors for a finished `stack build` run in `project`.
///
/// A successful build reports nothing, whatever it printed.
pub fn collect_build_errors(project: &Path, outcome: &BuildOutcome) -> Vec<BuildError> {
    match outcome {
        BuildOutcome::Succeeded => {
            info!("Build succeeded, no errors to report");
            Vec::new()
        }
        BuildOutcome::Failed { code, stderr } => {
            info!("Build failed with exit code {:?}", code);
            parse_build_log(project, stderr)
        }
    }
}

/// Extracts errors from the stderr of a failed build.
///
/// A build-plan failure yields exactly one record and bypasses per-line parsing.
pub fn parse_build_log(project: &Path, stderr: &str) -> Vec<BuildError> {
    if let Some(failure) = find_build_plan_failure(stderr) {
        return vec![failure.into_build_error(project)];
    }

    let lines = filter_diagnostic_lines(stderr);
    debug!("{} diagnostic line(s) in build output", lines.len());
    let blocks = unfold_error_lines(lines);
    debug!("{} diagnostic block(s)", blocks.len());
    let errors = parse_error_blocks(&blocks);
    info!("Parsed {} build error(s)", errors.len());
    errors
}

//! Detection of stack's build-plan failures.
//!
//! When stack cannot resolve the project's dependencies it never invokes GHC,
//! so there are no per-file diagnostics to parse. Instead the whole failure is
//! reported against `package.yaml`.

use crate::e_types::BuildError;
use log::debug;
use std::path::Path;

/// Marker stack prints when dependency resolution fails.
pub const BUILD_PLAN_MARKER: &str =
    "Error: While constructing the build plan, the following exceptions were encountered:";

/// A build-plan failure found in captured stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildPlanFailure<'a> {
    /// Everything after the last occurrence of [`BUILD_PLAN_MARKER`].
    pub detail: &'a str,
}

impl BuildPlanFailure<'_> {
    /// Converts the failure into the single record reported for it.
    pub fn into_build_error(self, project: &Path) -> BuildError {
        BuildError::build_plan_failure(project, self.detail)
    }
}

/// Looks for the build-plan failure marker in `stderr`.
///
/// Returns `None` when the marker is absent, leaving the text to the regular
/// diagnostic pipeline.
///
/// # Example
/// ```
/// use stackrunner::e_buildplan::{find_build_plan_failure, BUILD_PLAN_MARKER};
///
/// let log = format!("[error] \n{}\nbystring needed", BUILD_PLAN_MARKER);
/// let failure = find_build_plan_failure(&log).unwrap();
/// assert_eq!(failure.detail, "\nbystring needed");
/// assert!(find_build_plan_failure("[info] Building library").is_none());
/// ```
pub fn find_build_plan_failure(stderr: &str) -> Option<BuildPlanFailure<'_>> {
    let (_, detail) = stderr.rsplit_once(BUILD_PLAN_MARKER)?;
    debug!("Build plan failure detected ({} bytes of detail)", detail.len());
    Some(BuildPlanFailure { detail })
}

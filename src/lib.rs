#![doc = include_str!("../README.md")]

// Re-export commonly used items for the binary
pub mod prelude {
    pub use log::{debug, error, info, trace, warn};
    pub use std::path::{Path, PathBuf};
}

pub mod e_buildplan;
pub mod e_cli;
pub mod e_command_builder;
pub mod e_config;
pub mod e_error;
pub mod e_filter;
pub mod e_parser;
pub mod e_pipeline;
pub mod e_report;
pub mod e_runner;
pub mod e_types;
pub mod e_unfold;

pub use e_cli::Cli;
pub use e_config::RunnerConfig;
pub use e_error::RunnerError;
pub use e_pipeline::{collect_build_errors, parse_build_log};
pub use e_report::OutputFormat;
pub use e_runner::run_stack;
pub use e_types::{BuildError, BuildOutcome};

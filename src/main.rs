//! # stackrunner
//!
//! Runs `stack build --fast --verbose` in a Haskell project and prints the GHC
//! errors it produced as a JSON array, ready for an editor to underline.
//!
//! ## Quick Start
//! ```sh
//! stackrunner ~/Projects/my-app
//! stackrunner --format text ~/Projects/my-app -- --ghc-options=-Wall
//! ```

use anyhow::Context;
use clap::Parser;
use stackrunner::e_pipeline::{collect_build_errors, compile_patterns};
use stackrunner::e_report::render;
use stackrunner::prelude::*;
use stackrunner::{run_stack, BuildError, Cli, RunnerConfig};

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("CLI options: {:?}", cli);

    compile_patterns();

    let config = RunnerConfig::from_cli(&cli);
    let errors = match run_stack(&config) {
        Ok(outcome) => collect_build_errors(&config.project_dir, &outcome),
        Err(err) if err.is_executable_missing() => {
            error!("{}", err);
            vec![BuildError::executable_missing(&err.to_string())]
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("could not build {}", config.project_dir.display()));
        }
    };

    let rendered = render(&errors, cli.format, cli.pretty).context("failed to render build errors")?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end_matches('\n'));
    }
    Ok(())
}

use crate::e_report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs `stack build` and reports GHC errors as structured JSON.", long_about = None)]
pub struct Cli {
    #[arg(help = "Root directory of the stack project to build.")]
    pub path: PathBuf,

    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format for the collected errors."
    )]
    pub format: OutputFormat,

    #[arg(long, default_value_t = false, help = "Pretty-print JSON output.")]
    pub pretty: bool,

    #[arg(
        long,
        value_name = "PROGRAM",
        help = "Build executable to run (default: $STACKRUNNER_STACK, then `stack`)."
    )]
    pub stack: Option<String>,

    #[arg(long, short = 'v', help = "Log progress to stderr.")]
    pub verbose: bool,

    #[arg(last = true, help = "Additional arguments passed to `stack build`.")]
    pub extra: Vec<String>,
}

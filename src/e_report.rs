use crate::e_types::BuildError;
use clap::ValueEnum;
use std::fmt::Write as _;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A JSON array of error objects (`[]` when there are none).
    #[default]
    Json,
    /// `file:line:column: error: message` followed by indented details.
    Text,
}

/// Renders the errors in the requested format.
pub fn render(errors: &[BuildError], format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(errors)?),
        OutputFormat::Json => Ok(serde_json::to_string(errors)?),
        OutputFormat::Text => Ok(render_text(errors)),
    }
}

fn render_text(errors: &[BuildError]) -> String {
    let mut out = String::new();
    for err in errors {
        let _ = writeln!(out, "{}:{}:{}: error: {}", err.file, err.line, err.column, err.extras);
        for detail in err.details.iter().flatten() {
            let _ = writeln!(out, "  {}", detail);
        }
    }
    out
}

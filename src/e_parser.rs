use crate::e_types::BuildError;
use crate::e_unfold::ErrorBlock;
use once_cell::sync::Lazy;
use regex::Regex;

/// Text GHC puts between the source location and the message.
pub const ERROR_MARKER: &str = ": error:";

/// `<anything>[warn] /abs/path.hs:<line>:<col>: error:<message>`
pub(crate) static ERROR_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+\[warn\] (?P<file>/.+?):(?P<line>\d+):(?P<col>\d+)(?P<rest>: error:.*)$")
        .expect("error header pattern")
});

/// Parses a GHC error header line into a record with no details yet.
///
/// Returns `None` for anything that is not an error header: warnings, relative
/// paths, or line/column numbers too large to represent.
///
/// # Example
/// ```
/// use stackrunner::e_parser::parse_error_line;
///
/// let line = "t: [warn] /src/Main.hs:6:8: error: Variable not in scope";
/// let err = parse_error_line(line).unwrap();
/// assert_eq!((err.file.as_str(), err.line, err.column), ("/src/Main.hs", 6, 8));
/// assert_eq!(err.extras, "Variable not in scope");
///
/// assert!(parse_error_line("t: [warn] /src/Main.hs:6:8: warning: [-Wunused]").is_none());
/// ```
pub fn parse_error_line(line: &str) -> Option<BuildError> {
    let caps = ERROR_HEADER.captures(line)?;
    let line_no = caps["line"].parse().ok()?;
    let column = caps["col"].parse().ok()?;
    Some(BuildError {
        file: caps["file"].to_string(),
        line: line_no,
        column,
        details: Some(Vec::new()),
        extras: strip_error_marker(&caps["rest"]),
    })
}

/// Removes the first `: error:` from `rest` and trims what is left.
fn strip_error_marker(rest: &str) -> String {
    rest.replacen(ERROR_MARKER, "", 1).trim().to_string()
}

/// Parses one block: the header becomes the record, the remaining lines its details.
pub fn parse_error_block(block: &[String]) -> Option<BuildError> {
    let (header, body) = block.split_first()?;
    let mut err = parse_error_line(header)?;
    err.details
        .get_or_insert_with(Vec::new)
        .extend(body.iter().cloned());
    Some(err)
}

/// Parses every block, silently skipping those without an error header.
pub fn parse_error_blocks(blocks: &[ErrorBlock]) -> Vec<BuildError> {
    blocks
        .iter()
        .filter_map(|block| {
            let parsed = parse_error_block(block);
            if parsed.is_none() {
                log::trace!(
                    "Skipping block without error header: {:?}",
                    block.first().map(String::as_str).unwrap_or_default()
                );
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "2019-12-01 11:52:31.304038: [warn] /home/dev/Projects/stack/HSRest/app/Main.hs:6:8: error:";

    fn block(lines: &[&str]) -> ErrorBlock {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_error_line() {
        let err = parse_error_line(HEADER).expect("header should parse");
        assert_eq!(err.file, "/home/dev/Projects/stack/HSRest/app/Main.hs");
        assert_eq!(err.line, 6);
        assert_eq!(err.column, 8);
        assert_eq!(err.extras, "");
        assert_eq!(err.details, Some(Vec::new()));
    }

    #[test]
    fn test_extras_strips_first_marker_only() {
        let err = parse_error_line("t: [warn] /a/B.hs:1:2: error:   bad: error: worse  ").unwrap();
        assert_eq!(err.extras, "bad: error: worse");
    }

    #[test]
    fn test_path_with_colon_stops_at_location() {
        let err = parse_error_line("t: [warn] /a:b/C.hs:3:4: error: boom").unwrap();
        assert_eq!(err.file, "/a:b/C.hs");
        assert_eq!((err.line, err.column), (3, 4));
        assert_eq!(err.extras, "boom");
    }

    #[test]
    fn test_non_error_lines() {
        assert!(parse_error_line("t: [warn] /a/B.hs:1:2: warning: [-Wunused-matches]").is_none());
        assert!(parse_error_line("t: [warn] src/B.hs:1:2: error:").is_none());
        assert!(parse_error_line("t: [warn]     • Variable not in scope").is_none());
        assert!(parse_error_line("[warn] /a/B.hs:1:2: error:").is_none());
        assert!(parse_error_line("").is_none());
    }

    #[test]
    fn test_overflowing_location_is_unmatched() {
        let line = "t: [warn] /a/B.hs:99999999999999999999999:2: error: x";
        assert!(parse_error_line(line).is_none());
    }

    #[test]
    fn test_parse_error_block_details() {
        let lines = block(&[
            HEADER,
            "2019-12-01 11:52:31.304159: [warn]     • Variable not in scope: someFuncs :: IO ()",
            "2019-12-01 11:52:31.304305: [warn]   |",
        ]);
        let err = parse_error_block(&lines).unwrap();
        assert_eq!(err.details, Some(lines[1..].to_vec()));
    }

    #[test]
    fn test_parse_error_blocks_skips_unmatched() {
        let blocks = vec![
            block(&["t: [warn] /a/A.hs:1:1: warning: [-Wunused-imports]", "t: [warn]   x"]),
            block(&["t: [warn] /a/B.hs:2:3: error: first"]),
            block(&["t: [warn] Linking..."]),
            block(&["t: [warn] /a/C.hs:4:5: error:", "t: [warn]   more"]),
        ];
        let errors = parse_error_blocks(&blocks);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].file, "/a/B.hs");
        assert_eq!(errors[0].details, Some(Vec::new()));
        assert_eq!(errors[1].file, "/a/C.hs");
        assert_eq!(errors[1].details, Some(vec!["t: [warn]   more".to_string()]));
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_error_block(&[]).is_none());
        assert!(parse_error_blocks(&[]).is_empty());
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines carrying compiler output: something before the `[warn]` tag and
/// something after it.
pub(crate) static DIAGNOSTIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".+\[warn\].+").expect("diagnostic line pattern"));

/// Splits the captured stderr into lines and keeps only the diagnostic ones.
///
/// Carriage returns are dropped first so CRLF logs behave like LF logs.
///
/// # Example
/// ```
/// use stackrunner::e_filter::filter_diagnostic_lines;
///
/// let stderr = "t: [info] Building\r\nt: [warn] Main.hs:1:1: error:\r\n[warn] x\r\n";
/// assert_eq!(filter_diagnostic_lines(stderr), vec!["t: [warn] Main.hs:1:1: error:"]);
/// ```
pub fn filter_diagnostic_lines(stderr: &str) -> Vec<String> {
    let normalized = stderr.replace('\r', "");
    normalized
        .split('\n')
        .filter(|line| DIAGNOSTIC_LINE.is_match(line))
        .map(str::to_string)
        .collect()
}

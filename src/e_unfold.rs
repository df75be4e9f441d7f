use once_cell::sync::Lazy;
use regex::Regex;

/// A `[warn]` line with nothing after the tag. Stack emits one before and
/// after every GHC message, so these delimit the blocks.
pub(crate) static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+\[warn\] $").expect("separator line pattern"));

/// One GHC message: a header line followed by its continuation lines.
pub type ErrorBlock = Vec<String>;

/// Accumulates filtered diagnostic lines into [`ErrorBlock`]s.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Unfolder {
    current: ErrorBlock,
    blocks: Vec<ErrorBlock>,
}

impl Unfolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_separator(line: &str) -> bool {
        SEPARATOR_LINE.is_match(line)
    }

    /// Feeds one line. Separators seal the block in progress; anything else
    /// extends it.
    pub fn push(&mut self, line: String) {
        if Self::is_separator(&line) {
            self.seal();
        } else {
            self.current.push(line);
        }
    }

    fn seal(&mut self) {
        if !self.current.is_empty() {
            self.blocks.push(std::mem::take(&mut self.current));
        }
    }

    /// Number of lines waiting for a separator.
    pub fn pending(&self) -> usize {
        self.current.len()
    }

    /// Flushes the block in progress and returns all blocks in source order.
    pub fn finish(mut self) -> Vec<ErrorBlock> {
        self.seal();
        self.blocks
    }
}

/// Groups filtered diagnostic lines into blocks. Empty blocks are never produced.
///
/// # Example
/// ```
/// use stackrunner::e_unfold::unfold_error_lines;
///
/// let lines = ["t: [warn] ", "t: [warn] A.hs:1:1: error:", "t: [warn]   detail", "t: [warn] "];
/// let blocks = unfold_error_lines(lines.iter().map(|l| l.to_string()));
/// assert_eq!(blocks, vec![vec!["t: [warn] A.hs:1:1: error:", "t: [warn]   detail"]]);
/// ```
pub fn unfold_error_lines<I>(lines: I) -> Vec<ErrorBlock>
where
    I: IntoIterator<Item = String>,
{
    let mut unfolder = Unfolder::new();
    for line in lines {
        unfolder.push(line);
    }
    log::trace!("{} line(s) flushed at end of input", unfolder.pending());
    unfolder.finish()
}

use std::path::PathBuf;

/// Longest snippet kept for a finding, ellipsis included.
pub const MAX_SNIPPET_CHARS: usize = 60;
const ELLIPSIS: &str = "...";

/// A single debug-output call found on one line of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub file_path: PathBuf,
    pub line_number: usize,
    pub snippet: String,
}

impl Finding {
    pub fn new(file_path: impl Into<PathBuf>, line_number: usize, trimmed_line: &str) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            snippet: truncate_snippet(trimmed_line),
        }
    }
}

/// Outcome of a whole scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub files_scanned: usize,
    /// Files that could not be read under [`ReadErrorPolicy::Skip`](crate::ReadErrorPolicy::Skip).
    pub skipped: Vec<PathBuf>,
}

/// Cuts `line` to [`MAX_SNIPPET_CHARS`] characters, ending in `...` when shortened.
///
/// Counts characters rather than bytes so multi-byte text never splits.
pub fn truncate_snippet(line: &str) -> String {
    if line.chars().count() <= MAX_SNIPPET_CHARS {
        return line.to_string();
    }

    let keep = MAX_SNIPPET_CHARS - ELLIPSIS.len();
    let mut snippet: String = line.chars().take(keep).collect();
    snippet.push_str(ELLIPSIS);
    snippet
}

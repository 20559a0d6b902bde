use crate::error::{read_error, LogDigError};
use crate::models::{Finding, ScanReport};
use crate::patterns::Pattern;
use crate::walker::TreeWalker;
use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// How commented-out lines are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentMode {
    /// Only the trimmed line's prefix is checked. Lines inside a `/* */`
    /// block that don't start with `*` are still reported.
    #[default]
    Lexical,
    /// Also tracks `/* */` blocks across lines and skips lines that start
    /// inside one.
    BlockAware,
}

/// What a scan does with a file it cannot read as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Stop the whole scan on the first unreadable file.
    #[default]
    Abort,
    /// Log the file, record it in [`ScanReport::skipped`] and keep going.
    Skip,
}

pub struct DebugLogScanner {
    pub(crate) patterns: Vec<Pattern>,
    pub(crate) comment_prefixes: Vec<String>,
    pub(crate) comment_mode: CommentMode,
    pub(crate) extension: String,
    pub(crate) excluded_dir: String,
    pub(crate) respect_gitignore: bool,
    pub(crate) read_error_policy: ReadErrorPolicy,
}

impl Default for DebugLogScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLogScanner {
    pub fn new() -> Self {
        Self {
            patterns: Pattern::default_patterns(),
            comment_prefixes: Pattern::default_comment_prefixes(),
            comment_mode: CommentMode::default(),
            extension: Pattern::default_extension(),
            excluded_dir: Pattern::default_excluded_dir(),
            respect_gitignore: false,
            read_error_policy: ReadErrorPolicy::default(),
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<Pattern>) -> Self {
        // Keep default patterns if no patterns provided
        if patterns.is_empty() {
            return self;
        }
        self.patterns = patterns;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dir = name.into();
        self
    }

    pub fn with_gitignore(mut self, enable: bool) -> Self {
        self.respect_gitignore = enable;
        self
    }

    pub fn with_comment_mode(mut self, mode: CommentMode) -> Self {
        self.comment_mode = mode;
        self
    }

    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.read_error_policy = policy;
        self
    }

    pub fn walker<P: AsRef<Path>>(&self, root_path: P) -> TreeWalker {
        TreeWalker::new(root_path.as_ref())
            .with_extension(self.extension.as_str())
            .with_excluded_dir(self.excluded_dir.as_str())
            .with_gitignore(self.respect_gitignore)
    }

    /// Walks `root_path` and scans every matching file in discovery order.
    pub fn scan<P: AsRef<Path>>(&self, root_path: P) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for path in self.walker(root_path).walk()? {
            let path = path?;
            match read_file(&path) {
                Ok(content) => {
                    report.files_scanned += 1;
                    report.findings.extend(self.scan_content(&path, &content));
                }
                Err(err) if self.read_error_policy == ReadErrorPolicy::Skip => {
                    warn!("Skipping {}: {}", path.display(), err.message);
                    report.skipped.push(path);
                }
                Err(err) => return Err(err.into()),
            }
        }

        info!(
            "Scanned {} files, {} findings, {} skipped",
            report.files_scanned,
            report.findings.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    pub fn scan_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let content = read_file(path)?;
        Ok(self.scan_content(path, &content))
    }

    pub(crate) fn scan_content(&self, file_path: &Path, content: &str) -> Vec<Finding> {
        debug!("Scanning {}", file_path.display());
        let mut in_block = false;

        content
            .lines()
            .enumerate()
            .filter_map(|(line_idx, line)| {
                let starts_in_block = in_block;
                if self.comment_mode == CommentMode::BlockAware {
                    in_block = block_comment_open_after(in_block, line);
                }

                let trimmed = trim_line(line);
                let pattern = self.patterns.iter().find(|p| p.is_match(trimmed))?;

                if self.is_commented_out(trimmed, starts_in_block) {
                    return None;
                }

                debug!(
                    "{}:{} matched {}",
                    file_path.display(),
                    line_idx + 1,
                    pattern.name
                );
                Some(Finding::new(file_path, line_idx + 1, trimmed))
            })
            .collect()
    }

    fn is_commented_out(&self, trimmed: &str, starts_in_block: bool) -> bool {
        if self
            .comment_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
        {
            return true;
        }

        self.comment_mode == CommentMode::BlockAware
            && (starts_in_block || trimmed.starts_with("/*"))
    }
}

/// Trims whitespace and byte order marks from both ends of `line`.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn read_file(path: &Path) -> std::result::Result<String, LogDigError> {
    std::fs::read_to_string(path).map_err(|err| read_error(path, &err))
}

/// Whether a `/* */` comment is still open at the end of `line`.
fn block_comment_open_after(mut in_block: bool, line: &str) -> bool {
    let mut rest = line;
    loop {
        if in_block {
            match rest.find("*/") {
                Some(end) => {
                    in_block = false;
                    rest = &rest[end + 2..];
                }
                None => return true,
            }
        } else {
            match (rest.find("/*"), rest.find("//")) {
                (Some(open), Some(line_comment)) if line_comment < open => return false,
                (Some(open), _) => {
                    in_block = true;
                    rest = &rest[open + 2..];
                }
                (None, _) => return false,
            }
        }
    }
}

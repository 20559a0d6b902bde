use colored::*;
use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The scan root or a directory below it could not be listed.
    Filesystem,
    /// A matching file could not be read as text.
    Read,
}

#[derive(Debug)]
pub struct LogDigError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LogDigError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for LogDigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "Error:".red().bold(), self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n{} {}", "Suggestion:".yellow().bold(), suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for LogDigError {}

pub fn handle_path_error(path: &Path) -> LogDigError {
    if !path.exists() {
        LogDigError::new(
            ErrorKind::Filesystem,
            format!("Path '{}' does not exist", path.display()),
        )
        .with_suggestion("Check the path and try again. Use '.' for current directory.")
    } else if !path.is_dir() {
        LogDigError::new(
            ErrorKind::Filesystem,
            format!("Path '{}' is not a directory", path.display()),
        )
        .with_suggestion("Please provide a directory path, not a file.")
    } else {
        LogDigError::new(
            ErrorKind::Filesystem,
            format!("Cannot access path '{}'", path.display()),
        )
        .with_suggestion("Check permissions and try again.")
    }
}

pub fn walk_error(err: ignore::Error) -> LogDigError {
    LogDigError::new(ErrorKind::Filesystem, format!("Failed to walk directory: {}", err))
        .with_suggestion("Check permissions on the directories being scanned.")
}

pub fn read_error(path: &Path, err: &io::Error) -> LogDigError {
    let suggestion = if err.kind() == io::ErrorKind::InvalidData {
        "The file is not valid UTF-8. Use --skip-unreadable to scan past it."
    } else {
        "Check file permissions, or use --skip-unreadable to scan past it."
    };

    LogDigError::new(
        ErrorKind::Read,
        format!("Cannot read '{}': {}", path.display(), err),
    )
    .with_suggestion(suggestion)
}

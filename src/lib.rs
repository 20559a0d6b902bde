//! Find leftover `console.log(` / `console.warn(` / `console.error(` calls in a
//! source tree.
//!
//! ```no_run
//! use logdig::{print_report, DebugLogScanner};
//!
//! let report = DebugLogScanner::new().scan(".")?;
//! print_report(&report.findings)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod walker;

pub use error::{ErrorKind, LogDigError};
pub use models::{Finding, ScanReport, MAX_SNIPPET_CHARS};
pub use patterns::Pattern;
pub use report::{print_report, render_report, write_report};
pub use scanner::{CommentMode, DebugLogScanner, ReadErrorPolicy};
pub use walker::TreeWalker;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &str) {
        let file_path = dir.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
    }

    #[test]
    fn test_clean_tree_renders_only_congratulations() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "README.md", "console.log(1);\n");
        create_test_file(temp_dir.path(), "src/app.js", "// console.log(1);\nrun();\n");

        let report = DebugLogScanner::new().scan(temp_dir.path()).unwrap();
        assert_eq!(
            render_report(&report.findings),
            "Congratulations! Your code is cleaner than a cat that just bathed.\n"
        );
    }

    #[test]
    fn test_comment_prefix_decides_reporting() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "a.js", "    // console.warn(\"x\");\n");
        create_test_file(temp_dir.path(), "b.js", "    console.warn(\"x\");\n");

        let report = DebugLogScanner::new().scan(temp_dir.path()).unwrap();
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].file_path.ends_with("b.js"));
    }

    #[test]
    fn test_snippet_length_invariant() {
        let temp_dir = TempDir::new().unwrap();
        let lines: Vec<String> = (50..70)
            .map(|width| format!("console.log({})", "z".repeat(width - 13)))
            .collect();
        create_test_file(temp_dir.path(), "w.js", &lines.join("\n"));

        let report = DebugLogScanner::new().scan(temp_dir.path()).unwrap();
        assert_eq!(report.findings.len(), lines.len());

        for (finding, line) in report.findings.iter().zip(&lines) {
            let len = finding.snippet.chars().count();
            assert!(len <= MAX_SNIPPET_CHARS);
            assert_eq!(
                finding.snippet.ends_with("..."),
                line.len() > MAX_SNIPPET_CHARS
            );
            if line.len() <= MAX_SNIPPET_CHARS {
                assert_eq!(&finding.snippet, line);
            }
        }
    }

    #[test]
    fn test_report_numbers_findings_in_discovery_order() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "lib/z.js", "console.log(z);\n");
        create_test_file(temp_dir.path(), "main.js", "x();\nconsole.error(m);\n");
        create_test_file(temp_dir.path(), "node_modules/dep/index.js", "console.log(d);\n");

        let report = DebugLogScanner::new().scan(temp_dir.path()).unwrap();
        let text = render_report(&report.findings);

        let first = text.find("1. ").unwrap();
        let second = text.find("2. ").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains("z.js:1"));
        assert!(text[second..].contains("main.js:2"));
        assert!(!text.contains("index.js"));
        assert!(text.contains("Found 2 forgotten console statements"));
    }
}

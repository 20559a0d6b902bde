//! Plain-text report of findings.

use crate::models::Finding;
use std::io::{self, Write};

const CONGRATULATIONS: &str =
    "Congratulations! Your code is cleaner than a cat that just bathed.";
const DIVIDER_WIDTH: usize = 60;

/// Renders the report for `findings`, which must already be in discovery order.
pub fn render_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("{}\n", CONGRATULATIONS);
    }

    let divider = "=".repeat(DIVIDER_WIDTH);
    let mut lines = vec![
        String::new(),
        "🔍 CONSOLE LOG ARCHAEOLOGIST REPORT 🔍".to_string(),
        format!("Found {} forgotten console statements", findings.len()),
        String::new(),
        "These artifacts were discovered:".to_string(),
        divider.clone(),
    ];

    for (index, finding) in findings.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!(
            "{}. {}:{}",
            index + 1,
            finding.file_path.display(),
            finding.line_number
        ));
        lines.push(format!("   {}", finding.snippet));
    }

    lines.extend([
        String::new(),
        divider,
        String::new(),
        "💡 Tip: Consider removing these before deploying.".to_string(),
        "   Or leave them as a time capsule for future developers.".to_string(),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn write_report<W: Write>(out: &mut W, findings: &[Finding]) -> io::Result<()> {
    out.write_all(render_report(findings).as_bytes())?;
    out.flush()
}

pub fn print_report(findings: &[Finding]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_only_congratulations() {
        assert_eq!(render_report(&[]), format!("{}\n", CONGRATULATIONS));
    }

    #[test]
    fn test_report_layout() {
        let findings = vec![
            Finding::new("src/a.js", 3, "console.log(a);"),
            Finding::new("src/b.js", 1, "console.error(b);"),
        ];
        let divider = "=".repeat(60);

        let expected = format!(
            "\n🔍 CONSOLE LOG ARCHAEOLOGIST REPORT 🔍\n\
             Found 2 forgotten console statements\n\n\
             These artifacts were discovered:\n\
             {divider}\n\
             \n1. src/a.js:3\n\
             \x20  console.log(a);\n\
             \n2. src/b.js:1\n\
             \x20  console.error(b);\n\
             \n{divider}\n\
             \n💡 Tip: Consider removing these before deploying.\n\
             \x20  Or leave them as a time capsule for future developers.\n"
        );

        assert_eq!(render_report(&findings), expected);
    }

    #[test]
    fn test_write_report_to_buffer() {
        let findings = vec![Finding::new("x.js", 7, "console.warn(x)")];
        let mut buffer = Vec::new();
        write_report(&mut buffer, &findings).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Found 1 forgotten console statements"));
        assert!(text.contains("\n1. x.js:7\n   console.warn(x)\n"));
    }
}

use regex::Regex;

#[derive(Debug, Clone)]
pub struct Pattern {
    pub name: String,
    pub regex: Regex,
}

impl Pattern {
    /// Builds a pattern that matches `marker` as a plain substring.
    pub fn literal(marker: &str) -> Self {
        Self {
            name: marker.to_string(),
            // An escaped literal is always a valid regex.
            regex: Regex::new(&regex::escape(marker)).expect("escaped literal compiles"),
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    pub fn default_patterns() -> Vec<Pattern> {
        ["console.error(", "console.warn(", "console.log("]
            .into_iter()
            .map(Pattern::literal)
            .collect()
    }

    pub fn default_comment_prefixes() -> Vec<String> {
        vec!["//".to_string(), "*".to_string()]
    }

    pub fn default_extension() -> String {
        ".js".to_string()
    }

    pub fn default_excluded_dir() -> String {
        "node_modules".to_string()
    }
}

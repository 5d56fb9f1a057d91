//! Exclusion patterns value object
//!
//! A pattern without `*` hides every path that contains it as a substring.
//! A pattern with `*` is a wildcard where each `*` matches any run of
//! characters (including none) and the match may start anywhere in the path.
//! Paths are compared in their `/`-normalized relative form.

use regex::Regex;

use crate::error::{WeaveError, WeaveResult};

#[derive(Debug, Clone)]
enum Rule {
    Substring(String),
    Wildcard(Regex),
}

impl Rule {
    fn compile(pattern: &str) -> WeaveResult<Self> {
        if !pattern.contains('*') {
            return Ok(Rule::Substring(pattern.to_string()));
        }

        let source = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        Regex::new(&source)
            .map(Rule::Wildcard)
            .map_err(|e| WeaveError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Rule::Substring(needle) => path.contains(needle.as_str()),
            Rule::Wildcard(re) => re.is_match(path),
        }
    }
}

/// Compiled set of exclusion patterns
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    patterns: Vec<String>,
    rules: Vec<Rule>,
}

impl ExclusionMatcher {
    /// Create a matcher that hides nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile patterns. Blank entries are skipped and duplicates collapse.
    pub fn new<I, S>(patterns: I) -> WeaveResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::empty();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.trim().is_empty() || matcher.patterns.iter().any(|p| p == pattern) {
                continue;
            }
            matcher.rules.push(Rule::compile(pattern)?);
            matcher.patterns.push(pattern.to_string());
        }
        Ok(matcher)
    }

    /// Check if a relative path should be hidden from the tree
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        if self.rules.is_empty() {
            return false;
        }
        let normalized = normalize_path(relative_path);
        self.rules.iter().any(|rule| rule.matches(&normalized))
    }

    /// Patterns in the order they were added
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One-shot check without keeping a compiled matcher around.
///
/// Patterns that fail to compile are treated as non-matching.
pub fn is_excluded<S: AsRef<str>>(relative_path: &str, patterns: &[S]) -> bool {
    let normalized = normalize_path(relative_path);
    patterns.iter().any(|p| {
        let p = p.as_ref();
        !p.trim().is_empty()
            && Rule::compile(p)
                .map(|rule| rule.matches(&normalized))
                .unwrap_or(false)
    })
}

/// Convert platform separators to `/`
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

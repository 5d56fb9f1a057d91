//! Applier output parsing
//!
//! The external applier ends its report with
//!
//! ```text
//! Summary of changes:
//! - src/main.rs: +12 lines, -3 lines
//! ```
//!
//! Only lines after the header that fit this shape are kept.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const SUMMARY_HEADER: &str = "Summary of changes:";

/// Per-file change counts reported by the applier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub file: String,
    pub additions: usize,
    pub deletions: usize,
}

fn summary_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^- (.+): \+(\d+) lines, -(\d+) lines").expect("summary regex is valid")
    })
}

/// Extract change summaries from applier stdout
pub fn parse_change_summary(stdout: &str) -> Vec<ChangeSummary> {
    let mut in_summary = false;
    let mut changes = Vec::new();

    for line in stdout.lines() {
        let line = line.trim_end_matches('\r');
        if line == SUMMARY_HEADER {
            in_summary = true;
            continue;
        }
        if !in_summary || !line.starts_with("- ") {
            continue;
        }
        if let Some(caps) = summary_line().captures(line) {
            let (Ok(additions), Ok(deletions)) = (caps[2].parse(), caps[3].parse()) else {
                continue;
            };
            changes.push(ChangeSummary {
                file: caps[1].to_string(),
                additions,
                deletions,
            });
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_after_header() {
        let stdout = "Patch applied successfully.\n\
                      - ignored: +1 lines, -1 lines\n\
                      Summary of changes:\n\
                      - src/main.rs: +12 lines, -3 lines\n\
                      - README.md: +0 lines, -7 lines\n\
                      - not a summary line\n";

        let changes = parse_change_summary(stdout);
        assert_eq!(
            changes,
            vec![
                ChangeSummary {
                    file: "src/main.rs".to_string(),
                    additions: 12,
                    deletions: 3,
                },
                ChangeSummary {
                    file: "README.md".to_string(),
                    additions: 0,
                    deletions: 7,
                },
            ]
        );
    }

    #[test]
    fn no_header_means_no_changes() {
        assert!(parse_change_summary("- a.rs: +1 lines, -2 lines\n").is_empty());
        assert!(parse_change_summary("").is_empty());
    }

    #[test]
    fn handles_crlf_output() {
        let stdout = "Summary of changes:\r\n- a.rs: +1 lines, -2 lines\r\n";
        assert_eq!(parse_change_summary(stdout)[0].deletions, 2);
    }
}

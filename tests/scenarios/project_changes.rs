//! Scenario: Project Changes Under a Saved Selection
//!
//! Journey: A developer keeps working while promptweave remembers what
//! they picked.
//!
//! Steps:
//! 1. Selects a directory and a file
//! 2. Deletes the file and adds a new one to the selected directory
//! 3. Reviews the selection, then selects everything again
//!
//! Success Criteria:
//! - Vanished paths are kept and flagged, never silently dropped
//! - New files are not selected behind the user's back
//! - The directory shows as partially selected until re-selected

use crate::common::*;

fn tree_line<'a>(stdout: &'a str, name: &str) -> &'a str {
    stdout
        .lines()
        .find(|l| l.trim_end().ends_with(name))
        .unwrap_or_else(|| panic!("no tree line for {}:\n{}", name, stdout))
}

/// SCENARIO: Files come and go after a selection was saved
#[test]
fn scenario_selection_outlives_project_changes() {
    let env = TestEnv::initialized();

    // Step 1
    env.run(&["select", "src/util", "README.md"]).assert_success();

    // Step 2
    std::fs::remove_file(env.project_path("README.md")).unwrap();
    env.write_file("src/util/extra.rs", "pub fn extra() {}\n");

    // Step 3
    let selection = env.run(&["selection"]);
    selection.assert_success();
    assert!(
        selection.stdout.contains("README.md (missing)"),
        "vanished file should be flagged:\n{}",
        selection.stdout
    );

    let tree = env.run(&["tree"]);
    tree.assert_success();
    assert!(tree_line(&tree.stdout, "util/ (2 files)").contains("[-]"));
    assert!(tree_line(&tree.stdout, "extra.rs").contains("[ ]"));
    assert!(tree_line(&tree.stdout, "mod.rs").contains("[x]"));

    env.run(&["select", "src/util"]).assert_success();
    let tree = env.run(&["tree"]);
    assert!(tree_line(&tree.stdout, "util/ (2 files)").contains("[x]"));

    let json = env.run(&["--json", "selection"]).json();
    assert_eq!(json["missing"], serde_json::json!(["README.md"]));
}

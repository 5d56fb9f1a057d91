//! Scenario: First Prompt
//!
//! Journey: A developer wants an assistant to change their project.
//!
//! Steps:
//! 1. Runs `promptweave tree` before setup - told to run init
//! 2. Runs `promptweave init` in the project
//! 3. Selects the source directory and the README
//! 4. Writes the request and generates the prompt
//! 5. Feeds the assistant's answer back through `apply`
//!
//! Success Criteria:
//! - Guidance instead of a confusing failure before init
//! - The generator sees exactly the selected files
//! - The change report lists what the applier did
#![cfg(unix)]

use crate::common::*;

/// SCENARIO: From an untouched project to an applied response
#[test]
fn scenario_first_prompt_complete_journey() {
    // Step 1: nothing set up yet
    let env = TestEnv::new();
    write_sample_project(&env);
    let result = env.run(&["tree"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("promptweave init"),
        "Step 1: should point at init.\nstderr:\n{}",
        result.stderr
    );

    // Step 2: init
    env.run(&["init"]).assert_success();
    configure_tools(&env, FAKE_GENERATOR, FAKE_APPLIER);

    // The tools directory is part of the project now; keep it out.
    env.write_file(
        ".promptweave/ignore_config.yaml",
        "ignore_patterns:\n- .git\n- .promptweave\n- node_modules\n- tools\n- '*.log'\n",
    );

    // Step 3: select
    env.run(&["select", "src", "README.md"]).assert_success();
    let tree = env.run(&["tree"]);
    tree.assert_success();
    assert!(
        tree.stdout.contains("[x] src/"),
        "Step 3: src should be fully selected.\n{}",
        tree.stdout
    );

    // Step 4: request and generate
    env.run(&["request", "Print a friendlier greeting"])
        .assert_success();
    let generated = env.run(&["--json", "generate"]);
    generated.assert_success();
    let out = generated.json();
    assert_eq!(out["files"], 4, "Step 4: README plus three source files");
    assert!(out["prompt"]
        .as_str()
        .unwrap_or_default()
        .contains("Directory: util/"));

    // Step 5: apply
    let applied = env.run_with_stdin(&["apply"], "```diff\n+println!(\"hello!\");\n```\n");
    applied.assert_success();
    assert!(
        applied.stdout.contains("src/main.rs"),
        "Step 5: the change report should list the file.\n{}",
        applied.stdout
    );
}

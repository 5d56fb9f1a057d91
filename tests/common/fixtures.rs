//! Sample projects and fake external tools.

use super::env::TestEnv;

pub const MAIN_RS: &str = "fn main() {\n    println!(\"hi\");\n}\n";
pub const LIB_RS: &str = "pub mod util;\n";

/// src/{main.rs, lib.rs, util/mod.rs}, README.md, build.log,
/// node_modules/pkg/index.js and an empty docs/drafts directory
pub fn write_sample_project(env: &TestEnv) {
    env.write_file("src/main.rs", MAIN_RS);
    env.write_file("src/lib.rs", LIB_RS);
    env.write_file("src/util/mod.rs", "pub fn helper() {}\n");
    env.write_file("README.md", "# sample\n");
    env.write_file("build.log", "noise\n");
    env.write_file("node_modules/pkg/index.js", "module.exports = {};\n");
    std::fs::create_dir_all(env.project_path("docs/drafts")).expect("create empty dir");
}

/// Generator that prints its format and the outline it was given
pub const FAKE_GENERATOR: &str = r#"#!/bin/sh
echo "format: $1"
cat "$2/code_structure.txt"
"#;

/// Applier that echoes the response and reports one change
pub const FAKE_APPLIER: &str = r#"#!/bin/sh
echo "response: $(cat "$1")"
echo "Summary of changes:"
echo "- src/main.rs: +2 lines, -1 lines"
"#;

/// Applier that always fails
pub const FAILING_APPLIER: &str = r#"#!/bin/sh
echo "No diff code block found" >&2
exit 1
"#;

/// Write `promptweave.toml` wiring the generator and applier to `sh` scripts
/// stored in the project
pub fn configure_tools(env: &TestEnv, generator: &str, applier: &str) {
    env.write_file("tools/generate.sh", generator);
    env.write_file("tools/apply.sh", applier);
    let settings = format!(
        "[commands]\n\
         generate = [\"sh\", \"{gen}\", \"{{format}}\", \"{{output}}\"]\n\
         apply = [\"sh\", \"{app}\", \"{{response}}\"]\n",
        gen = env.project_path("tools/generate.sh").display(),
        app = env.project_path("tools/apply.sh").display(),
    );
    env.write_file(".promptweave/promptweave.toml", &settings);
}

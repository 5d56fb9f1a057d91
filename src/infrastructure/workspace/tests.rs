//! Tests for the workspace module

use super::*;
use tempfile::tempdir;

fn initialized() -> (tempfile::TempDir, Workspace) {
    let dir = tempdir().unwrap();
    let ws = Workspace::in_project(dir.path());
    ws.init(None).unwrap();
    (dir, ws)
}

#[test]
fn init_creates_layout() {
    let dir = tempdir().unwrap();
    let ws = Workspace::in_project(dir.path());

    let created = ws.init(Some(Path::new("app"))).unwrap();

    assert_eq!(created.len(), 5);
    assert!(ws.user_config_path().exists());
    assert!(ws.formats_dir().join("markdown.xml").exists());
    assert_eq!(ws.source_directory().unwrap(), dir.path().join("app"));
}

#[test]
fn init_keeps_existing_files() {
    let (_dir, ws) = initialized();
    ws.update_final_request("keep me").unwrap();

    let created = ws.init(None).unwrap();

    assert!(created.is_empty());
    assert_eq!(ws.final_request().unwrap(), "keep me");
}

#[test]
fn missing_user_config_reads_as_empty_selection() {
    let dir = tempdir().unwrap();
    let ws = Workspace::in_project(dir.path());
    assert!(ws.selected_files().unwrap().is_empty());
}

#[test]
fn corrupt_user_config_is_a_persistence_read_error() {
    let (_dir, ws) = initialized();
    fs::write(ws.user_config_path(), "selected_files: [unclosed").unwrap();

    let err = ws.selected_files().unwrap_err();
    assert!(err.is_degradable());
}

#[test]
fn malformed_selection_keeps_source_readable() {
    let (dir, ws) = initialized();
    fs::write(ws.user_config_path(), "source_directory: .\nselected_files: 3\n").unwrap();

    assert_eq!(ws.source_directory().unwrap(), dir.path().join("."));
    let err = ws.selected_files().unwrap_err();
    assert!(err.is_degradable());
    assert!(err.to_string().contains("selected_files"), "{}", err);
}

#[test]
fn save_overwrites_a_malformed_selection() {
    let (_dir, ws) = initialized();
    fs::write(
        ws.user_config_path(),
        "source_directory: app\nselected_files: 3\ntheme: dark\n",
    )
    .unwrap();

    ws.save_selected_files(&SelectionSet::new()).unwrap();

    assert!(ws.selected_files().unwrap().is_empty());
    let content = fs::read_to_string(ws.user_config_path()).unwrap();
    assert!(content.contains("theme: dark"));
    assert!(content.contains("source_directory: app"));
}

#[test]
fn save_over_unparseable_document_is_a_write_error() {
    let (_dir, ws) = initialized();
    fs::write(ws.user_config_path(), "source_directory: [unclosed").unwrap();

    let err = ws
        .save_selected_files(&["a.rs"].into_iter().collect())
        .unwrap_err();
    assert!(matches!(err, WeaveError::PersistenceWrite { .. }), "{:?}", err);
}

#[test]
fn saved_selection_is_read_back() {
    let (_dir, ws) = initialized();
    let selection: SelectionSet = ["src/b.rs", "src/a.rs"].into_iter().collect();

    ws.save_selected_files(&selection).unwrap();

    assert_eq!(ws.selected_files().unwrap(), selection);
}

#[test]
fn rewrites_preserve_unknown_keys() {
    let (_dir, ws) = initialized();
    fs::write(
        ws.user_config_path(),
        "source_directory: .\nlast_opened: 2024-01-01\n",
    )
    .unwrap();

    ws.save_selected_files(&["main.rs"].into_iter().collect())
        .unwrap();
    ws.update_source(Path::new("../other")).unwrap();

    let content = fs::read_to_string(ws.user_config_path()).unwrap();
    assert!(content.contains("last_opened"));
    assert!(content.contains("main.rs"));
    assert!(content.contains("../other"));
}

#[test]
fn source_not_configured() {
    let dir = tempdir().unwrap();
    let ws = Workspace::in_project(dir.path());
    fs::create_dir_all(ws.root()).unwrap();
    fs::write(ws.user_config_path(), "selected_files: []\n").unwrap();

    assert!(matches!(
        ws.source_directory(),
        Err(WeaveError::SourceNotConfigured)
    ));
}

#[test]
fn absolute_source_is_kept() {
    let (dir, ws) = initialized();
    let elsewhere = dir.path().join("elsewhere");
    ws.update_source(&elsewhere).unwrap();
    assert_eq!(ws.source_directory().unwrap(), elsewhere);
}

#[test]
fn exclude_patterns_merge_without_duplicates() {
    let (_dir, ws) = initialized();
    fs::write(
        ws.user_config_path(),
        "source_directory: .\nexclude_patterns:\n- dist\n- .git\n",
    )
    .unwrap();
    fs::write(ws.ignore_config_path(), "ignore_patterns:\n- .git\n- '*.log'\n").unwrap();

    assert_eq!(ws.exclude_patterns().unwrap(), vec!["dist", ".git", "*.log"]);
}

#[test]
fn formats_are_listed_without_extension() {
    let (_dir, ws) = initialized();
    fs::write(ws.formats_dir().join("claude.xml"), "<format/>").unwrap();
    fs::write(ws.formats_dir().join("notes.txt"), "").unwrap();

    assert_eq!(ws.list_formats().unwrap(), vec!["claude", "markdown"]);
    assert!(ws.ensure_format("claude").is_ok());

    match ws.ensure_format("html").unwrap_err() {
        WeaveError::UnknownFormat { name, available } => {
            assert_eq!(name, "html");
            assert_eq!(available, "claude, markdown");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn configs_from_templates() {
    let (_dir, ws) = initialized();

    assert_eq!(ws.list_templates().unwrap(), vec!["project_data.yaml"]);

    let path = ws
        .create_config_from_template("project_data", "shop")
        .unwrap();
    assert_eq!(path, ws.root().join("shop.yaml"));
    assert_eq!(
        ws.config_content("shop.yaml").unwrap(),
        ws.template_content("project_data.yaml").unwrap()
    );
    assert!(ws.list_configs().unwrap().contains(&"shop.yaml".to_string()));
}

#[test]
fn custom_config_is_written_as_yaml() {
    let (_dir, ws) = initialized();
    let data: serde_yaml_ng::Value = serde_yaml_ng::from_str("project_name: shop\n").unwrap();

    ws.create_custom_config("custom", &data).unwrap();

    assert!(ws.config_content("custom").unwrap().contains("project_name: shop"));
}

#[test]
fn config_names_cannot_escape() {
    let (_dir, ws) = initialized();

    assert!(matches!(
        ws.config_content("../secrets"),
        Err(WeaveError::PathEscape { .. })
    ));
    assert!(matches!(
        ws.create_config_from_template("project_data", "/tmp/x"),
        Err(WeaveError::PathEscape { .. })
    ));
}

#[test]
fn workspace_documents_cannot_be_overwritten_as_configs() {
    let (_dir, ws) = initialized();
    let before = fs::read_to_string(ws.user_config_path()).unwrap();
    let source = ws.source_directory().unwrap();

    for name in ["user_config", "ignore_config.yaml", "Final_Request"] {
        assert!(
            matches!(
                ws.create_config_from_template("project_data", name),
                Err(WeaveError::ReservedName { .. })
            ),
            "{} should be refused",
            name
        );
    }
    assert!(matches!(
        ws.create_custom_config("user_config", &serde_yaml_ng::Value::Null),
        Err(WeaveError::ReservedName { .. })
    ));

    assert_eq!(fs::read_to_string(ws.user_config_path()).unwrap(), before);
    assert_eq!(ws.source_directory().unwrap(), source);
}

#[test]
fn selected_configs_are_recorded() {
    let (_dir, ws) = initialized();

    ws.update_selected_configs(Some("shop"), None).unwrap();

    let config = ws.read_user_config().unwrap();
    assert_eq!(config.selected_project_data.as_deref(), Some("shop.yaml"));
    assert_eq!(config.selected_user_config, None);
}

#[test]
fn list_dir_defaults_to_base() {
    let (dir, ws) = initialized();
    fs::write(dir.path().join("README.md"), "").unwrap();

    let listing = ws.list_dir(None).unwrap();

    assert!(listing.dirs.contains(&DEFAULT_WORKSPACE_DIR.to_string()));
    assert_eq!(listing.files, vec!["README.md"]);
}

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn cli_build_emits_normalized_json() {
    let out_dir = tempfile::tempdir().expect("tempdir");

    let out_file = sprig_cli::build_cmd(&fixture("page.json"), Some(out_dir.path()), sprig_cli::EmitMode::Json)
        .expect("build json");
    assert_eq!(out_file, out_dir.path().join("page.json"));

    let content = fs::read_to_string(&out_file).expect("read json output");
    let tree: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(
        tree,
        json!({
            "type": "element",
            "tag": "div",
            "props": {"class": "app", "data-count": 2},
            "children": [
                {
                    "type": "element",
                    "tag": "h1",
                    "props": {},
                    "children": [{"type": "text", "value": "My TODOs"}]
                },
                {
                    "type": "fragment",
                    "children": [
                        {"type": "text", "value": "first"},
                        {"type": "text", "value": "second"}
                    ]
                }
            ]
        })
    );
}

#[test]
fn cli_build_emits_outline() {
    let out_dir = tempfile::tempdir().expect("tempdir");

    let out_file = sprig_cli::build_cmd(&fixture("page.json"), Some(out_dir.path()), sprig_cli::EmitMode::Outline)
        .expect("build outline");

    let content = fs::read_to_string(&out_file).expect("read outline output");
    assert_eq!(
        content,
        "<div class=app data-count=2>\n  <h1>\n    \"My TODOs\"\n  <>\n    \"first\"\n    \"second\"\n"
    );
}

#[test]
fn cli_inspect_reports_counts() {
    let report = sprig_cli::inspect_cmd(&fixture("page.json")).expect("inspect");
    assert!(report.starts_with("<div class=app data-count=2>\n"));
    assert!(report.ends_with("nodes: 6 (elements: 2, text: 3, fragments: 1), depth: 3\n"));
}

#[test]
fn cli_build_reports_unsupported_children() {
    let out_dir = tempfile::tempdir().expect("tempdir");

    let err = sprig_cli::build_cmd(&fixture("bad.json"), Some(out_dir.path()), sprig_cli::EmitMode::Json)
        .unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("failed to load"), "{chain}");
    assert!(chain.contains("$.children[0].children[0]"), "{chain}");
    assert!(!out_dir.path().join("bad.json").exists());
}

#[test]
fn cli_build_reports_missing_input() {
    let err = sprig_cli::build_cmd(&fixture("missing.json"), None, sprig_cli::EmitMode::Json).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}

//! Integration tests for `docstack resolve`.

mod common;

use common::{TestEnv, DESIGN_DOC};
use predicates::prelude::*;

#[test]
fn test_resolve_prints_breadcrumb() {
    let env = TestEnv::new();

    env.resolve(DESIGN_DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Home > Projects > docstack > design.md",
        ))
        .stdout(predicate::str::contains("root: Home (com.example.docs:home)"))
        .stdout(predicate::str::contains("Projects/"));
}

#[test]
fn test_resolve_json_output() {
    let env = TestEnv::new();

    let output = env
        .resolve(DESIGN_DOC)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root"]["root_id"], "home");

    let documents = json["documents"].as_array().unwrap();
    let uris: Vec<&str> = documents.iter().map(|d| d["uri"].as_str().unwrap()).collect();
    assert_eq!(
        uris,
        [
            "doc://com.example.docs/1",
            "doc://com.example.docs/2",
            "doc://com.example.docs/42"
        ]
    );
}

#[test]
fn test_resolve_csv_output() {
    let env = TestEnv::new();

    env.resolve(DESIGN_DOC)
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "depth,uri,display_name,mime_type\n",
        ))
        .stdout(predicate::str::contains(
            "3,doc://com.example.docs/42,design.md,text/markdown",
        ));
}

#[test]
fn test_resolve_root_document() {
    let env = TestEnv::new();

    env.resolve("doc://com.example.docs/0")
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("1,doc://com.example.docs/0,Home,"));
}

#[test]
fn test_disabled_feature_resolves_nothing() {
    let env = TestEnv::new();
    let catalog = env.catalog();

    env.command()
        .arg("--catalog")
        .arg(&catalog)
        .arg("resolve")
        .arg(DESIGN_DOC)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no ancestry resolved"));
}

#[test]
fn test_feature_from_project_config() {
    let env = TestEnv::new();
    env.catalog();
    env.write_file(
        "docstack.yaml",
        "enable_find_path: true\ncatalog: catalog.yaml\noutput_format: yaml\n",
    );

    env.command()
        .arg("resolve")
        .arg(DESIGN_DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains("display_name: design.md"));
}

#[test]
fn test_flag_overrides_project_config() {
    let env = TestEnv::new();
    env.catalog();
    env.write_file(
        "docstack.yaml",
        "enable_find_path: true\ncatalog: catalog.yaml\n",
    );

    env.command()
        .arg("--disable-find-path")
        .arg("resolve")
        .arg(DESIGN_DOC)
        .assert()
        .code(1);
}

#[test]
fn test_unsupported_provider_resolves_nothing() {
    let env = TestEnv::new();

    env.resolve("doc://com.example.legacy/7").assert().code(1);
}

#[test]
fn test_failing_provider_resolves_nothing() {
    let env = TestEnv::new();

    env.resolve("doc://com.example.flaky/1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no ancestry resolved"));
}

#[test]
fn test_unknown_document_resolves_nothing() {
    let env = TestEnv::new();

    env.resolve("doc://com.example.docs/404").assert().code(1);
}

#[test]
fn test_verbose_logs_resolution() {
    let env = TestEnv::new();

    env.resolve(DESIGN_DOC)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains(DESIGN_DOC));
}

#[test]
fn test_largest_timeout_waits_without_deadline() {
    let env = TestEnv::new();

    env.resolve(DESIGN_DOC)
        .arg("--timeout")
        .arg(u64::MAX.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("design.md"));
}

#[test]
fn test_largest_timeout_from_environment() {
    let env = TestEnv::new();

    env.resolve(DESIGN_DOC)
        .env("DOCSTACK_RESOLVE_TIMEOUT_SECONDS", u64::MAX.to_string())
        .assert()
        .success();
}

#[test]
fn test_dot_segments_are_not_collapsed() {
    let env = TestEnv::new();

    // Read verbatim, this identifier names no catalog document.
    env.resolve("doc://com.example.docs/2/../42")
        .assert()
        .code(1);
}

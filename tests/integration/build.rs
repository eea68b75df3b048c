use predicates::prelude::*;
use std::path::PathBuf;

use crate::common::TestWorkflow;

/// Runs `build --no-open` and returns the printed artifact path.
fn build(workflow: &TestWorkflow, templates: &[&str]) -> (PathBuf, String) {
    let output = workflow.command().args(["build", "--no-open"]).args(templates).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let path = PathBuf::from(stdout.lines().next().unwrap());
    (path, stdout)
}

#[test]
fn test_build_prints_path_and_status() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let (path, stdout) = build(&workflow, &["Node"]);

    assert!(path.starts_with(workflow.cache_path()));
    assert_eq!(stdout.lines().nth(1), Some("Successfully built .gitignore file. Have fun!"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "### Node.gitignore\n\nnode_modules/\n\n\n");
}

#[test]
fn test_build_single_argument_selection() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let (path, _) = build(&workflow, &["python macos"]);

    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "### Python.gitignore\n\n__pycache__/\n\n\n### macOS.gitignore\n\n.DS_Store\n\n\n"
    );
}

#[test]
fn test_repeated_build_uses_cache() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let (first, _) = build(&workflow, &["Go", "Node"]);
    let (second, stdout) = build(&workflow, &["Go", "Node"]);

    assert_eq!(first, second);
    assert_eq!(stdout.lines().nth(1), Some("Using cached .gitignore file."));

    let (reversed, _) = build(&workflow, &["Node", "Go"]);
    assert_ne!(first, reversed);
}

#[test]
fn test_build_print_writes_contents() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    workflow
        .command()
        .args(["build", "--print", "Go"])
        .assert()
        .success()
        .stdout("### Go.gitignore\n\nbin/\n\n\n");
}

#[test]
fn test_build_before_update() {
    let workflow = TestWorkflow::new().unwrap();

    workflow
        .command()
        .args(["build", "--no-open", "Go"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template mirror not found"))
        .stderr(predicate::str::contains("run update first"));
}

#[test]
fn test_build_unknown_templates_yields_empty_artifact() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let (path, stdout) = build(&workflow, &["Cobol"]);
    assert_eq!(stdout.lines().nth(1), Some("Successfully built .gitignore file. Have fun!"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

    let (again, stdout) = build(&workflow, &["Cobol"]);
    assert_eq!(again, path);
    assert_eq!(stdout.lines().nth(1), Some("Using cached .gitignore file."));
}

#[test]
fn test_build_without_templates() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    workflow
        .command()
        .args(["build", "--no-open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No templates were selected"));
}

#[test]
fn test_update_invalidates_cached_artifacts() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();
    let (path, _) = build(&workflow, &["Go"]);

    workflow.commit_template("Go", "bin/\nvendor/\n").unwrap();
    workflow.update();
    assert!(!path.exists());

    let (rebuilt, _) = build(&workflow, &["Go"]);
    assert_eq!(rebuilt, path);
    assert_eq!(std::fs::read_to_string(rebuilt).unwrap(), "### Go.gitignore\n\nbin/\nvendor/\n\n\n");
}

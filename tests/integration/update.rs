use predicates::prelude::*;

use crate::common::TestWorkflow;

#[test]
fn test_first_update_clones_mirror() {
    let workflow = TestWorkflow::new().unwrap();

    workflow
        .command()
        .arg("update")
        .assert()
        .success()
        .stdout("Templates have been successfully updated.\n");

    assert!(workflow.mirror_path().join(".git").exists());
    assert_eq!(
        workflow.catalog().unwrap().unwrap(),
        vec!["Go", "Node", "Python", "macOS"]
    );
}

#[test]
fn test_second_update_pulls_new_templates() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    workflow.commit_template("Rust", "target/\n").unwrap();
    workflow.update();

    let catalog = workflow.catalog().unwrap().unwrap();
    assert!(catalog.contains(&"Rust".to_string()));
    assert!(workflow.mirror_path().join("Rust.gitignore").exists());
}

#[test]
fn test_failed_clone_leaves_catalog_untouched() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();
    let before = std::fs::read(workflow.catalog_path()).unwrap();

    let missing = workflow.data_path().join("no-such-remote");
    workflow
        .command()
        .args(["--repository"])
        .arg(workflow.data_path().join("other-mirror"))
        .args(["--remote", &format!("file://{}", missing.display())])
        .arg("update")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error: git clone failed"));

    assert_eq!(std::fs::read(workflow.catalog_path()).unwrap(), before);
}

#[test]
fn test_failed_first_clone_stores_nothing() {
    let workflow = TestWorkflow::new().unwrap();

    workflow
        .command()
        .args(["--remote", "file:///definitely/not/a/repository"])
        .arg("update")
        .assert()
        .failure()
        .code(1);

    assert!(workflow.catalog().unwrap().is_none());
}

#[test]
fn test_occupied_mirror_directory_is_reported() {
    let workflow = TestWorkflow::new().unwrap();
    std::fs::create_dir_all(workflow.mirror_path()).unwrap();
    std::fs::write(workflow.mirror_path().join("notes.txt"), "keep me").unwrap();

    workflow
        .command()
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));

    assert!(workflow.mirror_path().join("notes.txt").exists());
}

#[test]
fn test_error_is_a_single_line() {
    let workflow = TestWorkflow::new().unwrap();

    let output = workflow
        .command()
        .args(["--remote", "file:///definitely/not/a/repository"])
        .arg("update")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr was: {stderr}");
}

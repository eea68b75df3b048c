use crate::common::TestWorkflow;

#[test]
fn test_clean_removes_artifacts() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();
    workflow.command().args(["build", "--no-open", "Go"]).assert().success();
    workflow.command().args(["build", "--no-open", "Node"]).assert().success();

    workflow
        .command()
        .arg("clean")
        .assert()
        .success()
        .stdout("Removed 2 cached .gitignore files.\n");

    let remaining = std::fs::read_dir(workflow.cache_path()).unwrap().count();
    assert_eq!(remaining, 0);
}

#[test]
fn test_clean_without_cache() {
    let workflow = TestWorkflow::new().unwrap();

    workflow
        .command()
        .arg("clean")
        .assert()
        .success()
        .stdout("Removed 0 cached .gitignore files.\n");
}

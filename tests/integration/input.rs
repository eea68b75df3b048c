use serde_json::Value;

use crate::common::TestWorkflow;

fn items(workflow: &TestWorkflow, query: &[&str]) -> Vec<Value> {
    let output = workflow.command().arg("input").args(query).assert().success();
    let value: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    value["items"].as_array().unwrap().clone()
}

fn titles(items: &[Value]) -> Vec<&str> {
    items.iter().map(|item| item["title"].as_str().unwrap()).collect()
}

#[test]
fn test_missing_catalog_item() {
    let workflow = TestWorkflow::new().unwrap();

    let items = items(&workflow, &["go"]);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Templates missing");
    assert_eq!(items[0]["valid"], false);
}

#[test]
fn test_empty_query_lists_all_templates() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let items = items(&workflow, &[]);

    assert_eq!(titles(&items), vec!["Go", "Node", "Python", "macOS"]);
    assert_eq!(items[0]["autocomplete"], "Go ");
}

#[test]
fn test_filtered_query() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let items = items(&workflow, &["go py"]);

    assert_eq!(titles(&items), vec!["Build .gitignore file", "Python"]);
    assert_eq!(items[0]["arg"], "go py");
    assert_eq!(items[0]["valid"], true);
    assert_eq!(items[1]["autocomplete"], "go Python ");
}

#[test]
fn test_trailing_space_starts_new_filter() {
    let workflow = TestWorkflow::new().unwrap();
    workflow.update();

    let items = items(&workflow, &["Go "]);

    assert_eq!(items[0]["arg"], "Go");
    assert_eq!(items.len(), 5);
    assert_eq!(items[2]["autocomplete"], "Go Node ");
}

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::{MockApi, TestCli};

const PARENT: &str = "projects/test-project/locations/us-central1";

#[test]
fn test_get_operation_prints_a_running_status() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/operations/op-5")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-5"),
                "done": false
            }))),
    );

    let operation_name = format!("{PARENT}/operations/op-5");
    let output = TestCli::get().run(&api, ["get", "operation", "-o", operation_name.as_str()]);

    assert!(output.contains(&format!("Operation name: {PARENT}/operations/op-5")));
    assert!(output.contains("Operation id: op-5"));
    assert!(output.contains("Operation done: false"));
}

#[test]
fn test_get_operation_prints_terminal_errors() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/operations/op-6")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-6"),
                "done": true,
                "error": {"code": 3, "message": "training failed"}
            }))),
    );

    let operation_name = format!("{PARENT}/operations/op-6");
    let output = TestCli::get().run(&api, ["get", "operation", "-o", operation_name.as_str()]);

    assert!(output.contains("Operation done: true"));
    assert!(output.contains("\tcode: 3"));
    assert!(output.contains("\tmessage: training failed"));
}

#[test]
fn test_malformed_operation_names_are_rejected_before_any_request() {
    let api = MockApi::start();
    let (stdout, stderr) =
        TestCli::get().run_and_error(&api, ["get", "operation", "-o", "not-a-name"]);

    assert!(stdout.is_empty());
    assert!(stderr.contains("not-a-name"));
}

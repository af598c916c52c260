use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::{MockApi, TestCli};

const PARENT: &str = "projects/test-project/locations/us-central1";

fn model_body(model_id: &str, display_name: &str) -> serde_json::Value {
    json!({
        "name": format!("{PARENT}/models/{model_id}"),
        "displayName": display_name,
        "datasetId": "D1",
        "translationModelMetadata": {},
        "createTime": {"seconds": 1555119303, "nanos": 482546000},
        "updateTime": {"seconds": 1555119400, "nanos": 0},
        "deploymentState": 2
    })
}

#[test]
fn test_create_model_prints_the_trained_model() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("POST"))
            .and(path(format!("/v1/{PARENT}/models")))
            .and(body_json(json!({
                "displayName": "M1",
                "datasetId": "D1",
                "translationModelMetadata": {}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-123"),
                "done": false
            }))),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/operations/op-123")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-123"),
                "done": true,
                "response": model_body("mdl-1", "M1")
            }))),
    );

    let output = TestCli::get().run(&api, ["create", "model", "-i", "D1", "-m", "M1"]);

    assert!(output.contains(&format!(
        "Training operation name: {PARENT}/operations/op-123"
    )));
    assert!(output.contains("Training started..."));
    assert!(output.contains("Model display name: M1"));
    assert!(output.contains("Model deployment state: undeployed"));
}

#[test]
fn test_list_models_prints_one_block_per_model() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/models")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [model_body("mdl-2", "M2"), model_body("mdl-1", "M1")]
            }))),
    );

    let output = TestCli::get().run(&api, ["get", "models"]);

    assert!(output.starts_with("List of models:\n"));
    assert!(output.contains("Model display name: M1"));
    assert!(output.contains("Model display name: M2"));
    // Output is sorted by model id regardless of service order.
    assert!(
        output.find("Model id: mdl-1").unwrap() < output.find("Model id: mdl-2").unwrap(),
        "models should be listed in id order:\n{output}"
    );
}

#[test]
fn test_list_models_forwards_the_filter_expression() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/models")))
            .and(query_param("filter", "translationModelMetadata:*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [model_body("mdl-1", "M1")]
            }))),
    );

    let output = TestCli::get().run(
        &api,
        ["get", "models", "-f", "translationModelMetadata:*"],
    );
    assert!(output.contains("Model display name: M1"));
}

#[test]
fn test_get_model_prints_metadata_details() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/models/mdl-1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/models/mdl-1"),
                "displayName": "M1",
                "datasetId": "D1",
                "translationModelMetadata": {
                    "sourceLanguageCode": "en",
                    "targetLanguageCode": "es"
                },
                "createTime": {"seconds": 1555119303, "nanos": 482546000},
                "updateTime": {"seconds": 1555119400, "nanos": 0},
                "deploymentState": 1
            }))),
    );

    let output = TestCli::get().run(&api, ["get", "model", "-a", "mdl-1"]);

    assert!(output.contains(&format!("Model name: {PARENT}/models/mdl-1")));
    assert!(output.contains("Model id: mdl-1"));
    assert!(output.contains("Translation model metadata:"));
    assert!(output.contains("\tSource language code: en"));
    assert!(output.contains("Model deployment state: deployed"));
}

#[test]
fn test_delete_model_prints_exactly_the_confirmation() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("DELETE"))
            .and(path(format!("/v1/{PARENT}/models/mdl-1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-9"),
                "done": true,
                "response": {}
            }))),
    );

    let output = TestCli::get().run(&api, ["delete", "model", "-a", "mdl-1"]);
    assert_eq!(output, "Model deleted.\n");
}

#[test]
fn test_unknown_flags_are_rejected() {
    let api = MockApi::start();
    let (stdout, _stderr) = TestCli::get().run_and_error(&api, ["get", "models", "--bogus"]);
    assert!(stdout.is_empty());
}

#[test]
fn test_failed_training_reports_the_operation_error() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("POST"))
            .and(path(format!("/v1/{PARENT}/models")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-321"),
                "done": false
            }))),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/operations/op-321")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-321"),
                "done": true,
                "error": {"code": 3, "message": "dataset has too few sentence pairs"}
            }))),
    );

    let (stdout, stderr) =
        TestCli::get().run_and_error(&api, ["create", "model", "-i", "D1", "-m", "M1"]);

    // The submission lines are printed before the wait fails.
    assert!(stdout.contains("Training started..."));
    assert!(!stdout.contains("Model display name:"));
    assert!(stderr.contains("dataset has too few sentence pairs"));
}

use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::{MockApi, TestCli};

const PARENT: &str = "projects/test-project/locations/us-central1";

fn glossary_body() -> serde_json::Value {
    json!({
        "name": format!("{PARENT}/glossaries/test-glossary"),
        "languagePair": {"sourceLanguageCode": "en", "targetLanguageCode": "es"},
        "inputConfig": {"inputUri": "gs://bucket/glossary.csv"},
        "entryCount": 42
    })
}

#[test]
fn test_create_glossary_waits_and_prints_the_result() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("POST"))
            .and(path(format!("/v1/{PARENT}/glossaries")))
            .and(body_json(json!({
                "name": format!("{PARENT}/glossaries/test-glossary"),
                "languagePair": {"sourceLanguageCode": "en", "targetLanguageCode": "es"},
                "inputConfig": {"inputUri": "gs://bucket/glossary.csv"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-55"),
                "done": false
            }))),
    );
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/operations/op-55")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-55"),
                "done": true,
                "response": glossary_body()
            }))),
    );

    let output = TestCli::get().run(
        &api,
        [
            "create",
            "glossary",
            "-g",
            "test-glossary",
            "-s",
            "en",
            "-t",
            "es",
            "-u",
            "gs://bucket/glossary.csv",
        ],
    );

    assert!(output.contains(&format!(
        "Glossary creation operation name: {PARENT}/operations/op-55"
    )));
    assert!(output.contains(&format!("Glossary name: {PARENT}/glossaries/test-glossary")));
    assert!(output.contains("Glossary entry count: 42"));
}

#[test]
fn test_get_glossary_prints_details() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/glossaries/test-glossary")))
            .respond_with(ResponseTemplate::new(200).set_body_json(glossary_body())),
    );

    let output = TestCli::get().run(&api, ["get", "glossary", "-g", "test-glossary"]);

    assert!(output.contains("test-glossary"));
    assert!(output.contains("\tSource language code: en"));
    assert!(output.contains("Glossary input uri: gs://bucket/glossary.csv"));
}

#[test]
fn test_get_missing_glossary_fails_without_printing_a_name() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/glossaries/no-such-glossary")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 5, "message": "glossary not found", "status": "NOT_FOUND"}
            }))),
    );

    let (stdout, stderr) =
        TestCli::get().run_and_error(&api, ["get", "glossary", "-g", "no-such-glossary"]);

    assert!(!stdout.contains("Glossary name:"));
    assert!(stderr.contains("glossary not found"));
}

#[test]
fn test_list_glossaries_prints_a_header_and_each_entry() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("GET"))
            .and(path(format!("/v1/{PARENT}/glossaries")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "glossaries": [glossary_body()]
            }))),
    );

    let output = TestCli::get().run(&api, ["get", "glossaries"]);

    assert!(output.starts_with("List of glossaries:\n"));
    assert!(output.contains("Glossary id: test-glossary"));
}

#[test]
fn test_delete_glossary_prints_the_confirmation() {
    let api = MockApi::start();
    api.mount(
        Mock::given(method("DELETE"))
            .and(path(format!("/v1/{PARENT}/glossaries/test-glossary")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": format!("{PARENT}/operations/op-56"),
                "done": true,
                "response": {}
            }))),
    );

    let output = TestCli::get().run(&api, ["delete", "glossary", "-g", "test-glossary"]);
    assert_eq!(output, "Glossary deleted.\n");
}

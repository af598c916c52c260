//! Long-running operation handles.
//!
//! Mutations (model training, model deletion, glossary creation and
//! deletion) do not complete synchronously. Submitting one returns an
//! [`Operation`] handle; waiting on the handle drives it to its terminal
//! state exactly once and yields either the typed result or the terminal
//! error. Handles are not reusable.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    resources::name::OperationName,
};

/// State of a long-running operation as reported by the service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub name: OperationName,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Terminal error reported by a failed operation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OperationError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Handle for an in-flight mutation, parameterised by the type the
/// operation resolves to on success.
#[derive(Debug)]
pub struct Operation<ResponseT> {
    pub(crate) status: OperationStatus,
    pub(crate) response_type: PhantomData<ResponseT>,
}

impl<ResponseT> Operation<ResponseT> {
    pub(crate) fn new(status: OperationStatus) -> Self {
        Operation {
            status,
            response_type: PhantomData,
        }
    }

    pub fn name(&self) -> &OperationName {
        &self.status.name
    }

    pub fn is_done(&self) -> bool {
        self.status.done
    }
}

/// Terminal state of a successfully completed operation.
#[derive(Debug, Clone)]
pub struct Finished<ResponseT> {
    pub done: bool,
    pub response: ResponseT,
}

impl OperationStatus {
    /// Converts a terminal status into its typed result. A succeeded
    /// operation with no response payload decodes as the empty object, so
    /// deletions resolve while typed results still fail loudly if absent.
    pub(crate) fn into_finished<ResponseT: DeserializeOwned>(self) -> Result<Finished<ResponseT>> {
        if let Some(error) = self.error {
            return Err(Error::Operation {
                name: self.name.to_string(),
                code: error.code,
                message: error.message,
            });
        }
        let payload = self
            .response
            .unwrap_or_else(|| Value::Object(Default::default()));
        let response =
            serde_json::from_value(payload).map_err(|source| Error::BadOperationResponse {
                name: self.name.to_string(),
                source,
            })?;
        Ok(Finished {
            done: true,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{model::Model, EmptySuccess};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn status(value: Value) -> OperationStatus {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn succeeded_operation_yields_typed_response() {
        let finished: Finished<Model> = status(json!({
            "name": "projects/p/locations/us-central1/operations/op-1",
            "done": true,
            "response": {
                "name": "projects/p/locations/us-central1/models/mdl-1",
                "displayName": "M1",
                "datasetId": "D1",
                "translationModelMetadata": {},
                "createTime": {"seconds": 1, "nanos": 2},
                "updateTime": {"seconds": 3, "nanos": 4},
                "deploymentState": 2
            }
        }))
        .into_finished()
        .unwrap();

        assert!(finished.done);
        assert_eq!(finished.response.display_name.0, "M1");
        assert_eq!(finished.response.dataset_id.0, "D1");
    }

    #[test]
    fn failed_operation_surfaces_terminal_error() {
        let result = status(json!({
            "name": "projects/p/locations/us-central1/operations/op-2",
            "done": true,
            "error": {"code": 3, "message": "dataset has too few sentence pairs"}
        }))
        .into_finished::<Model>();

        match result {
            Err(Error::Operation {
                name,
                code,
                message,
            }) => {
                assert_eq!(name, "projects/p/locations/us-central1/operations/op-2");
                assert_eq!(code, 3);
                assert_eq!(message, "dataset has too few sentence pairs");
            }
            other => panic!("expected an operation error, got {other:?}"),
        }
    }

    #[test]
    fn succeeded_operation_without_payload_resolves_to_empty() {
        let finished: Finished<EmptySuccess> = status(json!({
            "name": "projects/p/locations/us-central1/operations/op-3",
            "done": true
        }))
        .into_finished()
        .unwrap();
        assert!(finished.done);
    }

    #[test]
    fn succeeded_operation_with_wrong_payload_fails_loudly() {
        let result = status(json!({
            "name": "projects/p/locations/us-central1/operations/op-4",
            "done": true,
            "response": {"unexpected": true}
        }))
        .into_finished::<Model>();
        assert!(matches!(result, Err(Error::BadOperationResponse { .. })));
    }
}

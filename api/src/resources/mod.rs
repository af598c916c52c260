pub mod evaluation;
pub mod glossary;
pub mod model;
pub mod name;
pub mod operation;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Body of a failed request: `{ "error": { code, message, status } }`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    pub fn into_error(self, status_code: StatusCode) -> Error {
        match self.error {
            Some(body) => Error::Api {
                status_code,
                message: body.message.unwrap_or_default(),
            },
            None => Error::BadProtocol {
                status_code,
                message: "error response carries no error payload".to_owned(),
            },
        }
    }
}

/// Empty JSON object responses, e.g. a confirmed deletion.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmptySuccess {}

/// Wall-clock instant as reported by the service.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

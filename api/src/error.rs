use reqwest::StatusCode;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API request failed with {}: {}", status_code, message)]
    Api {
        status_code: StatusCode,
        message: String,
    },

    #[error("Operation `{}` failed with code {}: {}", name, code, message)]
    Operation {
        name: String,
        code: i32,
        message: String,
    },

    #[error("Invalid endpoint `{}`", endpoint)]
    BadEndpoint { endpoint: Url },

    #[error("Bad token: {}", token)]
    BadToken { token: String },

    #[error("Expected projects/<project>/locations/<location>, got: {}", name)]
    BadLocationName { name: String },

    #[error(
        "Expected projects/<project>/locations/<location>/models/<model>, got: {}",
        name
    )]
    BadModelName { name: String },

    #[error(
        "Expected projects/<project>/locations/<location>/models/<model>/modelEvaluations/<evaluation>, got: {}",
        name
    )]
    BadModelEvaluationName { name: String },

    #[error(
        "Expected projects/<project>/locations/<location>/glossaries/<glossary>, got: {}",
        name
    )]
    BadGlossaryName { name: String },

    #[error(
        "Expected projects/<project>/locations/<location>/operations/<operation>, got: {}",
        name
    )]
    BadOperationName { name: String },

    #[error("Could not parse JSON response.")]
    BadJsonResponse(#[source] reqwest::Error),

    #[error(
        "Status code {} inconsistent with response payload: {}",
        status_code,
        message
    )]
    BadProtocol {
        status_code: StatusCode,
        message: String,
    },

    #[error("Operation `{}` returned an unexpected result payload", name)]
    BadOperationResponse {
        name: String,
        source: serde_json::Error,
    },

    #[error("Failed to initialise the HTTP client")]
    BuildHttpClient(#[source] reqwest::Error),

    #[error("HTTP request error: {}", message)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },
}

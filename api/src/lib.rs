#![deny(clippy::all)]
mod error;
pub mod resources;
pub mod retry;

use http::Method;
use log::debug;
use once_cell::sync::Lazy;
use reqwest::{
    blocking::{Client as HttpClient, Response as HttpResponse},
    header::{self, HeaderMap, HeaderValue},
    IntoUrl, Proxy, Result as ReqwestResult,
};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, thread::sleep, time::Duration};
use url::Url;

use crate::resources::{
    evaluation::ListModelEvaluationsResponse, glossary::ListGlossariesResponse,
    model::ListModelsResponse, ErrorEnvelope,
};
use crate::retry::{Retrier, RetryConfig};

pub use crate::{
    error::{Error, Result},
    resources::{
        evaluation::{
            ClassificationEvaluationMetrics, EvaluationMetrics, ModelEvaluation,
            TranslationEvaluationMetrics,
        },
        glossary::{
            Glossary, GlossaryInputConfig, GlossaryLanguages, LanguageCodePair, LanguageCodesSet,
            NewGlossary,
        },
        model::{
            DatasetId, DeploymentState, DisplayName, ImageClassificationModelMetadata, Model,
            ModelMetadata, NewModel, TextClassificationModelMetadata, TranslationModelMetadata,
        },
        name::{
            EvaluationId, GlossaryId, GlossaryName, Location, LocationName, ModelEvaluationName,
            ModelId, ModelName, OperationId, OperationName, ProjectId,
        },
        operation::{Finished, Operation, OperationError, OperationStatus},
        EmptySuccess, Timestamp,
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token(pub String);

pub struct Config {
    pub endpoint: Url,
    pub token: Token,
    pub accept_invalid_certificates: bool,
    pub proxy: Option<Url>,
    /// Retry settings to use, if any. These apply to idempotent requests
    /// only; operation submissions are never retried.
    pub retry_config: Option<RetryConfig>,
    /// Interval between polls while waiting on a long-running operation.
    pub operation_poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.clone(),
            token: Token("".to_owned()),
            accept_invalid_certificates: false,
            proxy: None,
            retry_config: None,
            operation_poll_interval: DEFAULT_OPERATION_POLL_INTERVAL,
        }
    }
}

#[derive(Debug)]
pub struct Client {
    endpoints: Endpoints,
    http_client: HttpClient,
    headers: HeaderMap,
    retrier: Option<Retrier>,
    operation_poll_interval: Duration,
}

#[derive(Serialize)]
struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
}

impl Client {
    /// Create a new API client.
    pub fn new(config: Config) -> Result<Client> {
        let http_client = build_http_client(&config)?;
        let headers = build_headers(&config)?;
        let endpoints = Endpoints::new(config.endpoint)?;
        let retrier = config.retry_config.map(Retrier::new);
        Ok(Client {
            endpoints,
            http_client,
            headers,
            retrier,
            operation_poll_interval: config.operation_poll_interval,
        })
    }

    /// Get the base url for the client
    pub fn base_url(&self) -> &Url {
        &self.endpoints.base
    }

    /// Submit a model training request. Training is a long-running
    /// operation; the returned handle resolves to the trained [`Model`].
    pub fn create_model(&self, parent: &LocationName, model: NewModel) -> Result<Operation<Model>> {
        self.post::<_, _, OperationStatus>(self.endpoints.models(parent)?, model, Retry::No)
            .map(Operation::new)
    }

    pub fn list_models(&self, parent: &LocationName, filter: Option<&str>) -> Result<Vec<Model>> {
        Ok(self
            .get_query::<_, _, ListModelsResponse>(
                self.endpoints.models(parent)?,
                Some(&ListQuery { filter }),
            )?
            .models)
    }

    pub fn get_model(&self, name: &ModelName) -> Result<Model> {
        self.get(self.endpoints.model(name)?)
    }

    /// Submit a model deletion request. Deletion is a long-running
    /// operation whose handle resolves once the model is gone.
    pub fn delete_model(&self, name: &ModelName) -> Result<Operation<EmptySuccess>> {
        self.delete::<_, OperationStatus>(self.endpoints.model(name)?)
            .map(Operation::new)
    }

    pub fn list_model_evaluations(
        &self,
        model: &ModelName,
        filter: Option<&str>,
    ) -> Result<Vec<ModelEvaluation>> {
        Ok(self
            .get_query::<_, _, ListModelEvaluationsResponse>(
                self.endpoints.model_evaluations(model)?,
                Some(&ListQuery { filter }),
            )?
            .model_evaluations)
    }

    pub fn get_model_evaluation(&self, name: &ModelEvaluationName) -> Result<ModelEvaluation> {
        self.get(self.endpoints.model_evaluation(name)?)
    }

    /// Submit a glossary creation request. The returned handle resolves to
    /// the imported [`Glossary`].
    pub fn create_glossary(
        &self,
        parent: &LocationName,
        glossary: NewGlossary,
    ) -> Result<Operation<Glossary>> {
        self.post::<_, _, OperationStatus>(self.endpoints.glossaries(parent)?, glossary, Retry::No)
            .map(Operation::new)
    }

    pub fn list_glossaries(
        &self,
        parent: &LocationName,
        filter: Option<&str>,
    ) -> Result<Vec<Glossary>> {
        Ok(self
            .get_query::<_, _, ListGlossariesResponse>(
                self.endpoints.glossaries(parent)?,
                Some(&ListQuery { filter }),
            )?
            .glossaries)
    }

    pub fn get_glossary(&self, name: &GlossaryName) -> Result<Glossary> {
        self.get(self.endpoints.glossary(name)?)
    }

    pub fn delete_glossary(&self, name: &GlossaryName) -> Result<Operation<EmptySuccess>> {
        self.delete::<_, OperationStatus>(self.endpoints.glossary(name)?)
            .map(Operation::new)
    }

    /// Get the latest state of a long-running operation without waiting
    /// on it.
    pub fn get_operation(&self, name: &OperationName) -> Result<OperationStatus> {
        self.get(self.endpoints.operation(name)?)
    }

    /// Block until the operation reaches a terminal state, then return the
    /// typed result or the terminal error. The handle is consumed; an
    /// operation is waited on at most once. There is no local timeout: if
    /// the service never terminates the operation, this blocks.
    pub fn wait_operation<ResponseT>(
        &self,
        operation: Operation<ResponseT>,
    ) -> Result<Finished<ResponseT>>
    where
        for<'de> ResponseT: Deserialize<'de>,
    {
        let Operation { mut status, .. } = operation;
        while !status.done {
            debug!(
                "Operation `{}` still running, polling again in {:?}",
                status.name, self.operation_poll_interval
            );
            sleep(self.operation_poll_interval);
            status = self.get_operation(&status.name)?;
        }
        status.into_finished()
    }

    fn get<LocationT, SuccessT>(&self, url: LocationT) -> Result<SuccessT>
    where
        LocationT: IntoUrl + Display + Clone,
        for<'de> SuccessT: Deserialize<'de>,
    {
        self.request(&Method::GET, &url, &None::<()>, &None::<()>, &Retry::Yes)
    }

    fn get_query<LocationT, QueryT, SuccessT>(
        &self,
        url: LocationT,
        query: Option<&QueryT>,
    ) -> Result<SuccessT>
    where
        LocationT: IntoUrl + Display + Clone,
        QueryT: Serialize,
        for<'de> SuccessT: Deserialize<'de>,
    {
        self.request(&Method::GET, &url, &None::<()>, &Some(query), &Retry::Yes)
    }

    fn post<LocationT, RequestT, SuccessT>(
        &self,
        url: LocationT,
        request: RequestT,
        retry: Retry,
    ) -> Result<SuccessT>
    where
        LocationT: IntoUrl + Display + Clone,
        RequestT: Serialize,
        for<'de> SuccessT: Deserialize<'de>,
    {
        self.request(&Method::POST, &url, &Some(request), &None::<()>, &retry)
    }

    fn delete<LocationT, SuccessT>(&self, url: LocationT) -> Result<SuccessT>
    where
        LocationT: IntoUrl + Display + Clone,
        for<'de> SuccessT: Deserialize<'de>,
    {
        self.request(&Method::DELETE, &url, &None::<()>, &None::<()>, &Retry::No)
    }

    fn request<LocationT, RequestT, SuccessT, QueryT>(
        &self,
        method: &Method,
        url: &LocationT,
        body: &Option<RequestT>,
        query: &Option<QueryT>,
        retry: &Retry,
    ) -> Result<SuccessT>
    where
        LocationT: IntoUrl + Display + Clone,
        RequestT: Serialize,
        QueryT: Serialize,
        for<'de> SuccessT: Deserialize<'de>,
    {
        debug!("Attempting {} `{}`", method, url);
        let http_response = self.raw_request(method, url, body, query, retry)?;

        let status = http_response.status();
        if status.is_success() {
            http_response
                .json::<SuccessT>()
                .map_err(Error::BadJsonResponse)
        } else {
            let envelope = http_response
                .json::<ErrorEnvelope>()
                .map_err(Error::BadJsonResponse)?;
            Err(envelope.into_error(status))
        }
    }

    fn raw_request<LocationT, RequestT, QueryT>(
        &self,
        method: &Method,
        url: &LocationT,
        body: &Option<RequestT>,
        query: &Option<QueryT>,
        retry: &Retry,
    ) -> Result<HttpResponse>
    where
        LocationT: IntoUrl + Display + Clone,
        RequestT: Serialize,
        QueryT: Serialize,
    {
        let do_request = || {
            let request = self
                .http_client
                .request(method.clone(), url.clone())
                .headers(self.headers.clone());
            let request = match &query {
                Some(query) => request.query(query),
                None => request,
            };
            let request = match &body {
                Some(body) => request.json(body),
                None => request,
            };
            request.send()
        };

        let result = match retry {
            Retry::Yes => self.with_retries(do_request),
            Retry::No => do_request(),
        };
        result.map_err(|source| Error::ReqwestError {
            source,
            message: format!("{method} operation failed."),
        })
    }

    fn with_retries(
        &self,
        send_request: impl Fn() -> ReqwestResult<HttpResponse>,
    ) -> ReqwestResult<HttpResponse> {
        match &self.retrier {
            Some(retrier) => retrier.with_retries(send_request),
            None => send_request(),
        }
    }
}

#[derive(Copy, Clone)]
enum Retry {
    Yes,
    No,
}

#[derive(Debug)]
struct Endpoints {
    base: Url,
    v1: Url,
}

impl Endpoints {
    fn new(base: Url) -> Result<Self> {
        let v1 = construct_endpoint(&base, &["v1"])?;
        Ok(Endpoints { base, v1 })
    }

    fn models(&self, parent: &LocationName) -> Result<Url> {
        let mut segments = parent.segments();
        segments.push("models");
        construct_endpoint(&self.v1, &segments)
    }

    fn model(&self, name: &ModelName) -> Result<Url> {
        construct_endpoint(&self.v1, &name.segments())
    }

    fn model_evaluations(&self, model: &ModelName) -> Result<Url> {
        let mut segments = model.segments();
        segments.push("modelEvaluations");
        construct_endpoint(&self.v1, &segments)
    }

    fn model_evaluation(&self, name: &ModelEvaluationName) -> Result<Url> {
        construct_endpoint(&self.v1, &name.segments())
    }

    fn glossaries(&self, parent: &LocationName) -> Result<Url> {
        let mut segments = parent.segments();
        segments.push("glossaries");
        construct_endpoint(&self.v1, &segments)
    }

    fn glossary(&self, name: &GlossaryName) -> Result<Url> {
        construct_endpoint(&self.v1, &name.segments())
    }

    fn operation(&self, name: &OperationName) -> Result<Url> {
        construct_endpoint(&self.v1, &name.segments())
    }
}

fn construct_endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut endpoint = base.clone();

    let mut endpoint_segments = endpoint
        .path_segments_mut()
        .map_err(|_| Error::BadEndpoint {
            endpoint: base.clone(),
        })?;

    for segment in segments {
        endpoint_segments.push(segment);
    }

    drop(endpoint_segments);

    Ok(endpoint)
}

fn build_http_client(config: &Config) -> Result<HttpClient> {
    let mut builder = HttpClient::builder()
        .gzip(true)
        .danger_accept_invalid_certs(config.accept_invalid_certificates)
        .timeout(Some(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS)));

    if let Some(proxy) = config.proxy.clone() {
        builder = builder.proxy(Proxy::all(proxy).map_err(Error::BuildHttpClient)?);
    }
    builder.build().map_err(Error::BuildHttpClient)
}

fn build_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", &config.token.0)).map_err(|_| {
            Error::BadToken {
                token: config.token.0.clone(),
            }
        })?,
    );
    Ok(headers)
}

const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 120;
const DEFAULT_OPERATION_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub static DEFAULT_ENDPOINT: Lazy<Url> =
    Lazy::new(|| Url::parse("https://api.automl.dev").expect("Default URL is well-formed"));

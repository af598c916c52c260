use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::resources::{name::ModelName, Timestamp};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct DatasetId(pub String);

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct DisplayName(pub String);

/// A trained (or training) model as reported by the service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: ModelName,
    pub display_name: DisplayName,
    pub dataset_id: DatasetId,
    #[serde(flatten)]
    pub metadata: ModelMetadata,
    pub create_time: Timestamp,
    pub update_time: Timestamp,
    pub deployment_state: DeploymentState,
}

/// Request payload for training a new model.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewModel {
    pub display_name: DisplayName,
    pub dataset_id: DatasetId,
    #[serde(flatten)]
    pub metadata: ModelMetadata,
}

/// Kind-specific model metadata. On the wire exactly one of these keys is
/// present on the model object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ModelMetadata {
    TranslationModelMetadata(TranslationModelMetadata),
    TextClassificationModelMetadata(TextClassificationModelMetadata),
    ImageClassificationModelMetadata(ImageClassificationModelMetadata),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextClassificationModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageClassificationModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_budget: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}

/// Whether a trained model is currently serving. The wire codes come from
/// the service's published schema.
#[derive(Debug, Clone, Copy, Deserialize_repr, Serialize_repr, PartialEq, Eq)]
#[repr(i32)]
pub enum DeploymentState {
    Unspecified = 0,
    Deployed = 1,
    Undeployed = 2,
}

impl DeploymentState {
    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentState::Unspecified => "unspecified",
            DeploymentState::Deployed => "deployed",
            DeploymentState::Undeployed => "undeployed",
        }
    }
}

impl Display for DeploymentState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<Model>,
}

use serde::{Deserialize, Serialize};

use crate::resources::{name::ModelEvaluationName, Timestamp};

/// A single evaluation run over a trained model.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelEvaluation {
    pub name: ModelEvaluationName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_spec_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_example_count: Option<i64>,
    pub create_time: Timestamp,
    #[serde(flatten)]
    pub metrics: EvaluationMetrics,
}

/// Kind-specific evaluation metrics, mirroring the model metadata kinds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum EvaluationMetrics {
    TranslationEvaluationMetrics(TranslationEvaluationMetrics),
    ClassificationEvaluationMetrics(ClassificationEvaluationMetrics),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEvaluationMetrics {
    #[serde(default)]
    pub bleu_score: f64,
    #[serde(default)]
    pub base_bleu_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationEvaluationMetrics {
    #[serde(default)]
    pub au_prc: f64,
    #[serde(default)]
    pub base_au_prc: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListModelEvaluationsResponse {
    #[serde(default)]
    pub model_evaluations: Vec<ModelEvaluation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn evaluation_deserializes_with_translation_metrics() {
        let evaluation: ModelEvaluation = serde_json::from_value(json!({
            "name": "projects/p/locations/us-central1/models/mdl-1/modelEvaluations/ev-1",
            "evaluatedExampleCount": 1000,
            "createTime": {"seconds": 1555119400, "nanos": 0},
            "translationEvaluationMetrics": {
                "bleuScore": 48.355,
                "baseBleuScore": 39.071
            }
        }))
        .unwrap();

        assert_eq!(evaluation.evaluated_example_count, Some(1000));
        match &evaluation.metrics {
            EvaluationMetrics::TranslationEvaluationMetrics(metrics) => {
                assert_eq!(metrics.bleu_score, 48.355);
                assert_eq!(metrics.base_bleu_score, 39.071);
            }
            other => panic!("expected translation metrics, got {other:?}"),
        }
    }

    #[test]
    fn evaluation_list_defaults_to_empty() {
        let response: ListModelEvaluationsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.model_evaluations.is_empty());
    }
}

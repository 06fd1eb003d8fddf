//! AutoML `v1beta1` resources as returned by the REST API.
//!
//! Only the fields the reports read are modelled. Proto3 JSON omits default
//! values, so every field falls back to its default when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub name: String,
    pub display_name: String,
    pub example_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_sentiment_dataset_metadata: Option<TextSentimentDatasetMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSentimentDatasetMetadata {
    pub sentiment_max_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelEvaluation {
    pub name: String,
    pub annotation_spec_id: String,
    pub display_name: String,
    pub evaluated_example_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_evaluation_metrics: Option<ClassificationEvaluationMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationEvaluationMetrics {
    pub au_prc: f64,
    pub confidence_metrics_entry: Vec<ConfidenceMetricsEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfidenceMetricsEntry {
    pub confidence_threshold: f64,
    pub recall: f64,
    pub precision: f64,
    pub f1_score: f64,
    pub recall_at1: f64,
    pub precision_at1: f64,
    pub f1_score_at1: f64,
}

/// One page of `datasets.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDatasetsResponse {
    pub datasets: Vec<Dataset>,
    pub next_page_token: String,
}

/// One page of `modelEvaluations.list`. The REST field name is singular.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListModelEvaluationsResponse {
    pub model_evaluation: Vec<ModelEvaluation>,
    pub next_page_token: String,
}

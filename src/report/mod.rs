//! Plain-text rendering of list results.
//!
//! Numbers are rounded on their shortest decimal form, half away from zero,
//! and printed without trailing zeros: `0.285` to two places is `0.29` and
//! `50.00` is `50`.

use crate::domain::model::{
    ConfidenceMetricsEntry, Dataset, ModelEvaluation, TextSentimentDatasetMetadata,
};
use crate::domain::paths::resource_id;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};
use std::str::FromStr;

/// Decimal places for scores such as area under the precision/recall curve.
pub const SCORE_PRECISION: u32 = 6;
/// Decimal places for thresholds and percentages.
pub const PERCENT_PRECISION: u32 = 2;

/// Rounds `value` to `places` decimal places and formats it.
pub fn round_to(value: f64, places: u32) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        // NaN, infinities and magnitudes outside Decimal's range
        Err(_) => {
            let factor = 10f64.powi(places as i32);
            ((value * factor).round() / factor).to_string()
        }
    }
}

/// A ratio in `[0, 1]` as a percentage rounded to two places.
pub fn percent(ratio: f64) -> String {
    round_to(ratio * 100.0, PERCENT_PRECISION)
}

/// `util.inspect`-style rendering, e.g. `{ sentimentMaxLevel: 4 }`.
pub fn inspect_metadata(metadata: Option<&TextSentimentDatasetMetadata>) -> String {
    match metadata {
        Some(metadata) => format!(
            "{{ sentimentMaxLevel: {} }}",
            metadata.sentiment_max_level
        ),
        None => "undefined".to_string(),
    }
}

pub fn write_datasets<W: Write>(out: &mut W, datasets: &[Dataset]) -> io::Result<()> {
    writeln!(out, "List of datasets:")?;
    for dataset in datasets {
        write_dataset(out, dataset)?;
    }
    Ok(())
}

pub fn write_dataset<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "\nDataset name: {}", dataset.name)?;
    writeln!(out, "Dataset Id: {}", resource_id(&dataset.name))?;
    writeln!(out, "Dataset display name: {}", dataset.display_name)?;
    writeln!(out, "Text sentiment dataset metadata:")?;
    writeln!(
        out,
        "\t{}",
        inspect_metadata(dataset.text_sentiment_dataset_metadata.as_ref())
    )?;
    writeln!(out, "Dataset example count: {}", dataset.example_count)?;
    Ok(())
}

pub fn write_model_evaluations<W: Write>(
    out: &mut W,
    evaluations: &[ModelEvaluation],
) -> io::Result<()> {
    writeln!(out, "List of model evaluations:")?;
    for evaluation in evaluations {
        write_model_evaluation(out, evaluation)?;
    }
    Ok(())
}

pub fn write_model_evaluation<W: Write>(
    out: &mut W,
    evaluation: &ModelEvaluation,
) -> io::Result<()> {
    let metrics = evaluation
        .classification_evaluation_metrics
        .clone()
        .unwrap_or_default();

    writeln!(out, "\nModel evaluation name: {}", evaluation.name)?;
    writeln!(out, "Model evaluation Id: {}", resource_id(&evaluation.name))?;
    writeln!(
        out,
        "Model evaluation annotation spec Id: {}",
        evaluation.annotation_spec_id
    )?;
    writeln!(out, "Model evaluation display name: {}", evaluation.display_name)?;
    writeln!(
        out,
        "Model evaluation example count: {}",
        evaluation.evaluated_example_count
    )?;
    writeln!(out, "Video classification evaluation metrics:")?;
    writeln!(
        out,
        "\tModel auPrc: {}",
        round_to(metrics.au_prc, SCORE_PRECISION)
    )?;
    writeln!(out, "\tConfidence metrics entries:")?;

    for entry in &metrics.confidence_metrics_entry {
        write_confidence_metrics_entry(out, entry)?;
    }
    Ok(())
}

fn write_confidence_metrics_entry<W: Write>(
    out: &mut W,
    entry: &ConfidenceMetricsEntry,
) -> io::Result<()> {
    writeln!(
        out,
        "\t\tModel confidenceThreshold: {}",
        round_to(entry.confidence_threshold, PERCENT_PRECISION)
    )?;
    writeln!(out, "\t\tModel recall: {} %", percent(entry.recall))?;
    writeln!(out, "\t\tModel precision: {} %", percent(entry.precision))?;
    writeln!(out, "\t\tModel f1 score: {} %", percent(entry.f1_score))?;
    writeln!(out, "\t\tModel recall@1: {} %", percent(entry.recall_at1))?;
    writeln!(out, "\t\tModel precision@1: {} %", percent(entry.precision_at1))?;
    writeln!(out, "\t\tModel f1 score@1: {} % \n", percent(entry.f1_score_at1))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ClassificationEvaluationMetrics;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.8765432, 6), "0.876543");
        assert_eq!(round_to(0.8765435, 2), "0.88");
        assert_eq!(round_to(12.345678, 2), "12.35");
        assert_eq!(round_to(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_round_to_decimal_ties() {
        // Both sit just below the tie in binary.
        assert_eq!(round_to(0.285, 2), "0.29");
        assert_eq!(round_to(1.005, 2), "1.01");
        assert_eq!(round_to(2.5, 0), "3");
    }

    #[test]
    fn test_round_to_non_finite() {
        assert_eq!(round_to(f64::NAN, 2), "NaN");
        assert_eq!(round_to(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_percent_prints_shortest_form() {
        assert_eq!(percent(0.5), "50");
        assert_eq!(percent(0.2), "20");
        assert_eq!(percent(0.123456), "12.35");
        assert_eq!(percent(1.0), "100");
        assert_eq!(percent(0.0), "0");
    }

    #[test]
    fn test_percent_decimal_ties() {
        assert_eq!(percent(0.00145), "0.15");
        assert_eq!(percent(0.00575), "0.58");
    }

    #[test]
    fn test_threshold_and_recall_ties_in_report() {
        let entry = ConfidenceMetricsEntry {
            confidence_threshold: 0.285,
            recall: 0.00145,
            ..ConfidenceMetricsEntry::default()
        };
        let output = render(|out| write_confidence_metrics_entry(out, &entry));
        assert!(output.contains("\t\tModel confidenceThreshold: 0.29\n"));
        assert!(output.contains("\t\tModel recall: 0.15 %\n"));
    }

    #[test]
    fn test_dataset_block() {
        let dataset = Dataset {
            name: "projects/p1/locations/us-central1/datasets/D1".to_string(),
            display_name: "ds1".to_string(),
            example_count: 42,
            text_sentiment_dataset_metadata: Some(TextSentimentDatasetMetadata {
                sentiment_max_level: 4,
            }),
            ..Dataset::default()
        };

        let output = render(|out| write_datasets(out, &[dataset]));

        assert_eq!(
            output,
            "List of datasets:\n\
             \n\
             Dataset name: projects/p1/locations/us-central1/datasets/D1\n\
             Dataset Id: D1\n\
             Dataset display name: ds1\n\
             Text sentiment dataset metadata:\n\
             \t{ sentimentMaxLevel: 4 }\n\
             Dataset example count: 42\n"
        );
    }

    #[test]
    fn test_dataset_without_metadata_prints_undefined() {
        let output = render(|out| write_dataset(out, &Dataset::default()));
        assert!(output.contains("Text sentiment dataset metadata:\n\tundefined\n"));
    }

    #[test]
    fn test_empty_listing_prints_header_only() {
        assert_eq!(render(|out| write_datasets(out, &[])), "List of datasets:\n");
        assert_eq!(
            render(|out| write_model_evaluations(out, &[])),
            "List of model evaluations:\n"
        );
    }

    #[test]
    fn test_model_evaluation_block() {
        let evaluation = ModelEvaluation {
            name: "projects/p1/locations/us-central1/models/VCN1/modelEvaluations/E42"
                .to_string(),
            annotation_spec_id: "8907".to_string(),
            display_name: "cats".to_string(),
            evaluated_example_count: 120,
            classification_evaluation_metrics: Some(ClassificationEvaluationMetrics {
                au_prc: 0.87654321,
                confidence_metrics_entry: vec![ConfidenceMetricsEntry {
                    confidence_threshold: 0.456,
                    recall: 0.5,
                    precision: 0.123456,
                    f1_score: 0.2,
                    recall_at1: 0.75,
                    precision_at1: 0.3333333,
                    f1_score_at1: 1.0,
                }],
                ..ClassificationEvaluationMetrics::default()
            }),
            ..ModelEvaluation::default()
        };

        let output = render(|out| write_model_evaluations(out, &[evaluation]));

        assert_eq!(
            output,
            "List of model evaluations:\n\
             \n\
             Model evaluation name: projects/p1/locations/us-central1/models/VCN1/modelEvaluations/E42\n\
             Model evaluation Id: E42\n\
             Model evaluation annotation spec Id: 8907\n\
             Model evaluation display name: cats\n\
             Model evaluation example count: 120\n\
             Video classification evaluation metrics:\n\
             \tModel auPrc: 0.876543\n\
             \tConfidence metrics entries:\n\
             \t\tModel confidenceThreshold: 0.46\n\
             \t\tModel recall: 50 %\n\
             \t\tModel precision: 12.35 %\n\
             \t\tModel f1 score: 20 %\n\
             \t\tModel recall@1: 75 %\n\
             \t\tModel precision@1: 33.33 %\n\
             \t\tModel f1 score@1: 100 % \n\
             \n"
        );
    }

    #[test]
    fn test_missing_metrics_render_as_zero() {
        let output = render(|out| write_model_evaluation(out, &ModelEvaluation::default()));
        assert!(output.contains("\tModel auPrc: 0\n\tConfidence metrics entries:\n"));
        assert!(!output.contains("confidenceThreshold"));
    }
}

use clap::{Args, Parser};
use std::path::PathBuf;

/// Flags shared by every sample.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Path to a TOML file with a [client] section
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Lists AutoML datasets in a project and region.
#[derive(Debug, Clone, Parser)]
#[command(name = "list_datasets")]
pub struct ListDatasetsArgs {
    /// Google Cloud project id, e.g. "my-gcloud-project"
    #[arg(default_value = "YOUR_PROJECT_ID")]
    pub project_id: String,

    /// Compute region, e.g. "us-central1"
    #[arg(default_value = "YOUR_REGION_NAME")]
    pub compute_region: String,

    /// Filter expression, e.g. "textSentimentDatasetMetadata:*"
    #[arg(default_value = "YOUR_FILTER_EXPRESSION")]
    pub filter: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Lists the evaluations of an AutoML model.
#[derive(Debug, Clone, Parser)]
#[command(name = "list_model_evaluations")]
pub struct ListModelEvaluationsArgs {
    /// Google Cloud project id, e.g. "my-gcloud-project"
    #[arg(default_value = "YOUR_PROJECT_ID")]
    pub project_id: String,

    /// Compute region, e.g. "us-central1"
    #[arg(default_value = "YOUR_REGION_NAME")]
    pub compute_region: String,

    /// Model id, e.g. "VCN7209576908164431872"
    #[arg(default_value = "MODEL_ID")]
    pub model_id: String,

    /// Filter expression, e.g. "videoClassificationModelMetadata:*"
    #[arg(default_value = "FILTER_EXPRESSION")]
    pub filter: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

use crate::domain::model::{Dataset, ModelEvaluation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The list RPCs the samples call. Implementations return every record of
/// the listing in service order, or the first error encountered.
#[async_trait]
pub trait AutoMlService: Send + Sync {
    async fn list_datasets(&self, parent: &str, filter: &str) -> Result<Vec<Dataset>>;

    async fn list_model_evaluations(
        &self,
        parent: &str,
        filter: &str,
    ) -> Result<Vec<ModelEvaluation>>;
}

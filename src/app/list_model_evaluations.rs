use crate::domain::paths::model_path;
use crate::domain::ports::AutoMlService;
use crate::report;
use crate::utils::error::Result;
use std::io::Write;

/// Lists the evaluations of `model_id` matching `filter` and writes the
/// report to `out`. Returns the number of evaluations printed.
pub async fn run<S, W>(
    service: &S,
    project_id: &str,
    compute_region: &str,
    model_id: &str,
    filter: &str,
    out: &mut W,
) -> Result<usize>
where
    S: AutoMlService + ?Sized,
    W: Write,
{
    let parent = model_path(project_id, compute_region, model_id);
    tracing::info!(parent = %parent, filter = %filter, "Listing model evaluations");

    let evaluations = service.list_model_evaluations(&parent, filter).await?;
    tracing::info!("Received {} model evaluations", evaluations.len());

    report::write_model_evaluations(out, &evaluations)?;
    out.flush()?;
    Ok(evaluations.len())
}

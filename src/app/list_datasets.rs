use crate::domain::paths::location_path;
use crate::domain::ports::AutoMlService;
use crate::report;
use crate::utils::error::Result;
use std::io::Write;

/// Lists the datasets of `project_id`/`compute_region` matching `filter` and
/// writes the report to `out`. Returns the number of datasets printed.
///
/// Nothing is written when the request fails.
pub async fn run<S, W>(
    service: &S,
    project_id: &str,
    compute_region: &str,
    filter: &str,
    out: &mut W,
) -> Result<usize>
where
    S: AutoMlService + ?Sized,
    W: Write,
{
    let parent = location_path(project_id, compute_region);
    tracing::info!(parent = %parent, filter = %filter, "Listing datasets");

    let datasets = service.list_datasets(&parent, filter).await?;
    tracing::info!("Received {} datasets", datasets.len());

    report::write_datasets(out, &datasets)?;
    out.flush()?;
    Ok(datasets.len())
}

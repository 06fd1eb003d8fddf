/// `projects/{project}/locations/{region}`
pub fn location_path(project_id: &str, compute_region: &str) -> String {
    format!("projects/{}/locations/{}", project_id, compute_region)
}

/// `projects/{project}/locations/{region}/models/{model}`
pub fn model_path(project_id: &str, compute_region: &str, model_id: &str) -> String {
    format!(
        "{}/models/{}",
        location_path(project_id, compute_region),
        model_id
    )
}

/// Last segment of a resource name, e.g. the dataset id of
/// `projects/p/locations/r/datasets/TST123`.
pub fn resource_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

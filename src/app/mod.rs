// Application layer: one module per sample, each sequencing request then report.

pub mod list_datasets;
pub mod list_model_evaluations;

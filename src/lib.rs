pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod report;
pub mod utils;

pub use client::AutoMlClient;
pub use config::ClientConfig;
pub use domain::ports::AutoMlService;
pub use utils::error::{AutoMlError, Result};

pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, HarvestSettings};
pub use core::{engine::HarvestEngine, fetcher::HttpFetcher, pipeline::EmailPipeline};
pub use utils::error::{HarvestError, Result};

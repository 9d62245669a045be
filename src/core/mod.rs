pub mod csv_io;
pub mod engine;
pub mod expander;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod harvester;
pub mod pipeline;

pub use crate::domain::model::{BusinessRecord, BusinessTable, Harvest, TransformResult};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;

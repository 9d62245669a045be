use crate::core::fetcher::FetchSettings;
use crate::core::filter::FilterSettings;
use crate::domain::model::{BusinessTable, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn fetch_settings(&self) -> &FetchSettings;
    fn filter_settings(&self) -> &FilterSettings;
}

/// Fetches the HTML body of a page. Errors cover timeouts, DNS and non-2xx.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<BusinessTable>;
    async fn transform(&self, data: BusinessTable) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

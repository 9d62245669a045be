use crate::core::csv_io::{read_business_table, write_business_csv};
use crate::core::expander::expand_record;
use crate::core::filter::EmailFilter;
use crate::core::harvester::EmailHarvester;
use crate::domain::model::{
    BusinessTable, Harvest, RunSummary, TransformResult, EMAILS_COLUMN, WEBSITE_COLUMN,
};
use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline, Storage};
use crate::utils::error::Result;

/// CSV in, websites visited one at a time, CSV out.
pub struct EmailPipeline<S: Storage, F: PageFetcher, C: ConfigProvider> {
    storage: S,
    harvester: EmailHarvester<F>,
    config: C,
}

impl<S: Storage, F: PageFetcher, C: ConfigProvider> EmailPipeline<S, F, C> {
    pub fn new(storage: S, fetcher: F, config: C) -> Self {
        let filter = EmailFilter::new(config.filter_settings());
        Self {
            storage,
            harvester: EmailHarvester::new(fetcher, filter),
            config,
        }
    }

    fn log_harvest(harvest: &Harvest) {
        match harvest {
            Harvest::NoWebsite => tracing::info!("  → No website available"),
            Harvest::Emails {
                url,
                emails,
                rejected,
            } => {
                tracing::debug!("    Fetched: {}", url);
                for rejection in rejected {
                    tracing::debug!(
                        "    Removed {}: {}",
                        rejection.email,
                        rejection.reason
                    );
                }
                if emails.is_empty() {
                    tracing::info!("  → Found emails: None");
                } else {
                    tracing::info!("  → Found emails: {}", emails.join(", "));
                }
            }
            Harvest::Failed { url, reason } => {
                tracing::warn!("    Error extracting from {}: {}", url, reason);
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: PageFetcher, C: ConfigProvider> Pipeline for EmailPipeline<S, F, C> {
    async fn extract(&self) -> Result<BusinessTable> {
        let input = self.config.input_path();
        tracing::debug!("Reading businesses from: {}", input);

        let data = self.storage.read_file(input).await?;
        let table = read_business_table(&data)?;

        if !table.headers.iter().any(|h| h == WEBSITE_COLUMN) {
            tracing::warn!(
                "Input has no '{}' column, no websites will be visited",
                WEBSITE_COLUMN
            );
        }

        tracing::info!("Found {} businesses to process", table.records.len());
        Ok(table)
    }

    async fn transform(&self, data: BusinessTable) -> Result<TransformResult> {
        let mut headers = data.headers;
        if !headers.iter().any(|h| h == EMAILS_COLUMN) {
            headers.push(EMAILS_COLUMN.to_string());
        }

        let total = data.records.len();
        let mut summary = RunSummary {
            businesses: total,
            ..RunSummary::default()
        };
        let mut rows = Vec::with_capacity(total);

        // 逐筆處理，前一個請求結束後才發出下一個
        for (index, record) in data.records.iter().enumerate() {
            tracing::info!("[{}/{}] Processing: {}", index + 1, total, record.name());

            if let Some(website) = record.website() {
                summary.with_website += 1;
                tracing::info!("  → Extracting emails from: {}", website);
            }

            let harvest = self.harvester.harvest(record.website()).await;
            Self::log_harvest(&harvest);

            if matches!(harvest, Harvest::Failed { .. }) {
                summary.fetch_failures += 1;
            }
            summary.emails_found += harvest.emails().len();

            rows.extend(expand_record(record, harvest.emails()));
        }

        summary.rows = rows.len();
        tracing::info!(
            "Processed {} businesses ({} with websites, {} failed), {} emails found, {} rows",
            summary.businesses,
            summary.with_website,
            summary.fetch_failures,
            summary.emails_found,
            summary.rows
        );

        Ok(TransformResult {
            headers,
            rows,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output = self.config.output_path();
        let data = write_business_csv(&result.headers, &result.rows)?;

        tracing::debug!("Writing {} rows ({} bytes) to {}", result.rows.len(), data.len(), output);
        self.storage.write_file(output, &data).await?;

        Ok(output.to_string())
    }
}

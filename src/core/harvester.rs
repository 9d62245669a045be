use crate::core::extractor::extract_emails;
use crate::core::fetcher::normalize_website;
use crate::core::filter::EmailFilter;
use crate::domain::model::Harvest;
use crate::domain::ports::PageFetcher;
use crate::utils::validation::validate_url;

/// Fetch, extract and filter for a single website.
pub struct EmailHarvester<F: PageFetcher> {
    fetcher: F,
    filter: EmailFilter,
}

impl<F: PageFetcher> EmailHarvester<F> {
    pub fn new(fetcher: F, filter: EmailFilter) -> Self {
        Self { fetcher, filter }
    }

    /// Never fails: fetch errors come back as [`Harvest::Failed`].
    pub async fn harvest(&self, website: Option<&str>) -> Harvest {
        let Some(url) = website.and_then(normalize_website) else {
            return Harvest::NoWebsite;
        };

        // 無法解析的網址不送出請求
        if let Err(e) = validate_url("website", &url) {
            return Harvest::Failed {
                url,
                reason: e.to_string(),
            };
        }

        let html = match self.fetcher.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                return Harvest::Failed {
                    url,
                    reason: e.to_string(),
                }
            }
        };

        let candidates = extract_emails(&html);
        let outcome = self.filter.apply(&candidates);

        Harvest::Emails {
            url,
            emails: outcome.kept,
            rejected: outcome.rejected,
        }
    }
}

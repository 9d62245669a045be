pub mod cli;
pub mod toml_config;

use crate::core::fetcher::FetchSettings;
use crate::core::filter::FilterSettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::Parser;
use self::toml_config::HarvestFile;

pub const DEFAULT_INPUT: &str = "hvac-in-chicago-overview.csv";
pub const DEFAULT_OUTPUT: &str = "hvac-in-chicago-with-emails.csv";

#[derive(Debug, Clone, Parser)]
#[command(name = "email-harvester")]
#[command(about = "Visit each business website in a CSV and collect contact emails")]
#[command(
    after_help = "Example:\n  email-harvester --input my-businesses.csv --output results.csv"
)]
pub struct CliConfig {
    /// Input CSV file
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Output CSV file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// TOML file with [fetch] and [filter] settings
    #[arg(long)]
    pub config: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum emails kept per business
    #[arg(long)]
    pub max_emails: Option<usize>,

    /// List the URLs that would be fetched and exit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併預設值、TOML 檔與命令列參數（命令列優先）
    pub fn resolve(&self) -> Result<HarvestSettings> {
        let mut settings = HarvestSettings::new(&self.input, &self.output);

        if let Some(path) = &self.config {
            let file = HarvestFile::from_file(path)?;
            settings.apply_file(&file);
        }

        if let Some(timeout) = self.timeout {
            settings.fetch.timeout_seconds = timeout;
        }
        if let Some(max_emails) = self.max_emails {
            settings.filter.max_emails = max_emails;
        }

        Ok(settings)
    }
}

/// Fully resolved settings for one extractor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSettings {
    pub input_path: String,
    pub output_path: String,
    pub fetch: FetchSettings,
    pub filter: FilterSettings,
}

impl HarvestSettings {
    pub fn new(input_path: &str, output_path: &str) -> Self {
        Self {
            input_path: input_path.to_string(),
            output_path: output_path.to_string(),
            fetch: FetchSettings::default(),
            filter: FilterSettings::default(),
        }
    }

    pub fn apply_file(&mut self, file: &HarvestFile) {
        if let Some(fetch) = &file.fetch {
            if let Some(timeout) = fetch.timeout_seconds {
                self.fetch.timeout_seconds = timeout;
            }
            if let Some(user_agent) = &fetch.user_agent {
                self.fetch.user_agent = user_agent.clone();
            }
        }

        if let Some(filter) = &file.filter {
            if let Some(blocked) = &filter.blocked_substrings {
                self.filter.blocked_substrings = blocked.clone();
            }
            if let Some(extra) = &filter.extra_blocked_substrings {
                self.filter.blocked_substrings.extend(extra.iter().cloned());
            }
            if let Some(min_length) = filter.min_length {
                self.filter.min_length = min_length;
            }
            if let Some(max_emails) = filter.max_emails {
                self.filter.max_emails = max_emails;
            }
        }
    }
}

impl Validate for HarvestSettings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        validate_range("fetch.timeout_seconds", self.fetch.timeout_seconds, 1, 300)?;
        validate_non_empty_string("fetch.user_agent", &self.fetch.user_agent)?;
        validate_range("filter.max_emails", self.filter.max_emails, 1, 10)?;
        Ok(())
    }
}

impl ConfigProvider for HarvestSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn fetch_settings(&self) -> &FetchSettings {
        &self.fetch
    }

    fn filter_settings(&self) -> &FilterSettings {
        &self.filter
    }
}

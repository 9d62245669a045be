use crate::utils::error::{HarvestError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file for the extractor.
///
/// ```toml
/// [fetch]
/// timeout_seconds = 10
/// user_agent = "Mozilla/5.0 ..."
///
/// [filter]
/// blocked_substrings = ["example.com", "@sentry"]   # replaces the defaults
/// extra_blocked_substrings = ["godaddy.com"]        # added to the list
/// min_length = 6
/// max_emails = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvestFile {
    pub fetch: Option<FetchSection>,
    pub filter: Option<FilterSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSection {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    pub blocked_substrings: Option<Vec<String>>,
    pub extra_blocked_substrings: Option<Vec<String>>,
    pub min_length: Option<usize>,
    pub max_emails: Option<usize>,
}

impl HarvestFile {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HarvestError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

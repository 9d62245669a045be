use crate::core::extractor::dedupe_preserving_order;
use crate::domain::model::{RejectReason, Rejection};
use std::collections::HashSet;

/// 預設封鎖清單：佔位信箱與網站建置平台的追蹤信箱
pub const DEFAULT_BLOCKED_SUBSTRINGS: &[&str] = &[
    "example.com",
    "test.com",
    "placeholder",
    "wixpress.com",
    "sentry.io",
    "sentry.wixpress.com",
    "sentry-next.wixpress.com",
    "@sentry",
];

/// Addresses of this many characters or fewer are rejected.
pub const DEFAULT_MAX_REJECTED_LENGTH: usize = 5;
pub const DEFAULT_MAX_EMAILS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    pub blocked_substrings: Vec<String>,
    pub min_length: usize,
    pub max_emails: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            blocked_substrings: DEFAULT_BLOCKED_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_length: DEFAULT_MAX_REJECTED_LENGTH + 1,
            max_emails: DEFAULT_MAX_EMAILS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub kept: Vec<String>,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Clone)]
pub struct EmailFilter {
    blocked: Vec<String>,
    min_length: usize,
    max_emails: usize,
}

impl EmailFilter {
    pub fn new(settings: &FilterSettings) -> Self {
        let blocked = settings
            .blocked_substrings
            .iter()
            .map(|s| s.to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            blocked: dedupe_preserving_order(blocked),
            min_length: settings.min_length,
            max_emails: settings.max_emails,
        }
    }

    /// Keeps at most `max_emails` addresses, in input order. Every dropped
    /// address is reported with its reason.
    pub fn apply(&self, candidates: &[String]) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        let mut seen = HashSet::new();

        for email in candidates {
            let reason = if let Some(blocked) = self.blocked_substring(email) {
                Some(RejectReason::BlockedSubstring(blocked.to_string()))
            } else if email.chars().count() < self.min_length {
                Some(RejectReason::TooShort(email.chars().count()))
            } else if seen.contains(email.as_str()) {
                Some(RejectReason::Duplicate)
            } else if outcome.kept.len() >= self.max_emails {
                Some(RejectReason::OverLimit(self.max_emails))
            } else {
                None
            };

            match reason {
                Some(reason) => outcome.rejected.push(Rejection {
                    email: email.clone(),
                    reason,
                }),
                None => {
                    seen.insert(email.as_str());
                    outcome.kept.push(email.clone());
                }
            }
        }

        outcome
    }

    fn blocked_substring(&self, email: &str) -> Option<&str> {
        let lower = email.to_lowercase();
        self.blocked
            .iter()
            .find(|blocked| lower.contains(blocked.as_str()))
            .map(|s| s.as_str())
    }
}

impl Default for EmailFilter {
    fn default() -> Self {
        Self::new(&FilterSettings::default())
    }
}

/// 輸出時新增（或覆寫）的欄位名稱
pub const EMAILS_COLUMN: &str = "emails";
pub const NAME_COLUMN: &str = "name";
pub const WEBSITE_COLUMN: &str = "website";

/// One business row. Column order follows the source CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusinessRecord {
    fields: Vec<(String, String)>,
}

impl BusinessRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.set(key, value);
        }
        record
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrites an existing column in place, otherwise appends it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn name(&self) -> &str {
        self.get(NAME_COLUMN).unwrap_or("")
    }

    /// 網站欄位；空白視為沒有網站
    pub fn website(&self) -> Option<&str> {
        self.get(WEBSITE_COLUMN).filter(|w| !w.trim().is_empty())
    }

    pub fn emails(&self) -> &str {
        self.get(EMAILS_COLUMN).unwrap_or("")
    }

    pub fn with_email(&self, email: &str) -> Self {
        let mut copy = self.clone();
        copy.set(EMAILS_COLUMN, email);
        copy
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of visiting one business website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Harvest {
    /// No website on the record, nothing was fetched.
    NoWebsite,
    Emails {
        url: String,
        emails: Vec<String>,
        rejected: Vec<Rejection>,
    },
    Failed {
        url: String,
        reason: String,
    },
}

impl Harvest {
    pub fn emails(&self) -> &[String] {
        match self {
            Harvest::Emails { emails, .. } => emails,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    BlockedSubstring(String),
    TooShort(usize),
    Duplicate,
    OverLimit(usize),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::BlockedSubstring(s) => write!(f, "contains blocked substring '{}'", s),
            RejectReason::TooShort(len) => write!(f, "too short ({} chars)", len),
            RejectReason::Duplicate => write!(f, "duplicate"),
            RejectReason::OverLimit(max) => write!(f, "over the limit of {} emails", max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub email: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub businesses: usize,
    pub with_website: usize,
    pub fetch_failures: usize,
    pub emails_found: usize,
    pub rows: usize,
}

/// Rows read from the input CSV, with the header in source order.
#[derive(Debug, Clone, Default)]
pub struct BusinessTable {
    pub headers: Vec<String>,
    pub records: Vec<BusinessRecord>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub headers: Vec<String>,
    pub rows: Vec<BusinessRecord>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_column_order() {
        let mut record = BusinessRecord::from_pairs([("id", "7"), ("name", "Acme"), ("website", "")]);
        record.set("name", "Acme HVAC");
        record.set(EMAILS_COLUMN, "info@acme.com");

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["id", "name", "website", "emails"]);
        assert_eq!(record.name(), "Acme HVAC");
        assert_eq!(record.website(), None);
    }

    #[test]
    fn test_with_email_overwrites_existing_column() {
        let record = BusinessRecord::from_pairs([("name", "Acme"), ("emails", "old@acme.com")]);
        let copy = record.with_email("new@acme.com");
        assert_eq!(copy.emails(), "new@acme.com");
        assert_eq!(copy.len(), 2);
        assert_eq!(record.emails(), "old@acme.com");
    }
}

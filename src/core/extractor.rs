//! Pulls candidate email addresses out of an HTML document.
//!
//! Two sources are combined: `mailto:` link targets and a pattern scan of the
//! `<body>` text. The result keeps first-seen order with exact duplicates
//! removed. No filtering happens here, see [`crate::core::filter`].

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII 邊界：非 ASCII 文字緊貼在信箱前面時仍要能比對
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)").unwrap()
});

const MAILTO_PREFIX: &str = "mailto:";

/// Extract every candidate email from `html`, mailto links first.
pub fn extract_emails(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut candidates = mailto_targets(&document);
    candidates.extend(text_emails(&document));

    dedupe_preserving_order(candidates)
}

fn mailto_targets(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse(r#"a[href^="mailto:"]"#) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|link| link.value().attr("href"))
        .map(|href| href.strip_prefix(MAILTO_PREFIX).unwrap_or(href).to_string())
        .collect()
}

fn text_emails(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("body") else {
        return Vec::new();
    };

    let text: String = match document.select(&selector).next() {
        Some(body) => body.text().collect(),
        None => return Vec::new(),
    };

    EMAIL_PATTERN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub(crate) fn dedupe_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_mailto_and_body_text() {
        let html = r#"
            <html><body>
              <a href="mailto:info@acme.com">Email us</a>
              <p>Sales: sales@acme.com </p>
            </body></html>
        "#;
        assert_eq!(extract_emails(html), vec!["info@acme.com", "sales@acme.com"]);
    }

    #[test]
    fn test_mailto_link_text_is_deduplicated() {
        let html = r#"<body><a href="mailto:info@acme.com">info@acme.com</a></body>"#;
        assert_eq!(extract_emails(html), vec!["info@acme.com"]);
    }

    #[test]
    fn test_mailto_query_is_kept_verbatim() {
        let html = r#"<body><a href="mailto:info@acme.com?subject=Quote">Write</a></body>"#;
        assert_eq!(extract_emails(html), vec!["info@acme.com?subject=Quote"]);
    }

    #[test]
    fn test_duplicates_differing_in_case_are_both_kept() {
        let html = "<body><p>Info@Acme.com or info@acme.com</p></body>";
        assert_eq!(extract_emails(html), vec!["Info@Acme.com", "info@acme.com"]);
    }

    #[test]
    fn test_requires_two_letter_tld() {
        let html = "<body><p>bad: a@b.c good: owner@shop.io</p></body>";
        assert_eq!(extract_emails(html), vec!["owner@shop.io"]);
    }

    #[test]
    fn test_address_right_after_non_ascii_label() {
        let html = "<body><p>電郵info@acme.com</p><p>Kontaktéinfo@acme.de</p></body>";
        assert_eq!(extract_emails(html), vec!["info@acme.com", "info@acme.de"]);
    }

    #[test]
    fn test_address_followed_by_non_ascii_text() {
        let html = "<body><p>sales@acme.com聯絡我們</p></body>";
        assert_eq!(extract_emails(html), vec!["sales@acme.com"]);
    }

    #[test]
    fn test_head_content_is_ignored() {
        let html = r#"<html><head><title>hidden@acme.com</title></head><body>none here</body></html>"#;
        assert!(extract_emails(html).is_empty());
    }

    #[test]
    fn test_garbage_input_yields_nothing() {
        assert!(extract_emails("").is_empty());
        assert!(extract_emails("<<<not html>>>").is_empty());
    }
}

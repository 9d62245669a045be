//! First-email report over an extractor output file.
//!
//! Lines are split with [`parse_csv_line`], a deliberately small parser:
//! a `"` toggles the quoted state and is dropped, a `,` outside quotes ends
//! the field. `""` escapes and fields spanning several lines are not
//! understood. Files written by other tools may therefore split differently
//! than a full CSV reader would.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const EMAILS_HEADER: &str = crate::domain::model::EMAILS_COLUMN;
const UNKNOWN_BUSINESS: &str = "Unknown Business";

static VALID_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Split one physical line into fields.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

pub fn is_valid_email(candidate: &str) -> bool {
    VALID_EMAIL.is_match(candidate.trim())
}

/// Index of the column whose trimmed name equals `name`, ignoring case.
pub fn locate_column(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

/// Valid addresses from a comma-separated cell, in cell order.
pub fn valid_emails(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && is_valid_email(piece))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// 1-based count of rows with at least one valid email.
    pub sequence: usize,
    pub business: String,
    pub emails: Vec<String>,
    /// 1-based line in the source file.
    pub line_number: usize,
}

impl ReportEntry {
    pub fn first_email(&self) -> &str {
        self.emails.first().map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailReport {
    MissingColumn,
    Found {
        column_index: usize,
        column_name: String,
        entries: Vec<ReportEntry>,
    },
}

/// Build the report from the full file content.
pub fn build_report(content: &str) -> EmailReport {
    let mut lines = content.split('\n');
    let headers = parse_csv_line(lines.next().unwrap_or(""));

    let Some(column_index) = locate_column(&headers, EMAILS_HEADER) else {
        return EmailReport::MissingColumn;
    };

    let mut entries = Vec::new();
    for (offset, raw_line) in lines.enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let columns = parse_csv_line(line);
        // 欄位不足的列直接略過
        let Some(cell) = columns.get(column_index) else {
            continue;
        };

        let emails = valid_emails(cell);
        if emails.is_empty() {
            continue;
        }

        entries.push(ReportEntry {
            sequence: entries.len() + 1,
            business: columns
                .get(1)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_BUSINESS.to_string()),
            emails,
            line_number: offset + 2,
        });
    }

    EmailReport::Found {
        column_index,
        column_name: headers[column_index].clone(),
        entries,
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. Business: {}", self.sequence, self.business)?;
        if self.emails.len() > 1 {
            writeln!(f, "   First email: {}", self.first_email())?;
            writeln!(f, "   Total valid emails: {}", self.emails.len())?;
            writeln!(f, "   All emails: {}", self.emails.join(", "))?;
        } else {
            writeln!(f, "   Email: {}", self.first_email())?;
        }
        writeln!(f, "   Line: {}", self.line_number)
    }
}

impl fmt::Display for EmailReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailReport::MissingColumn => {
                writeln!(f, "No \"{}\" column found in the CSV file.", EMAILS_HEADER)
            }
            EmailReport::Found {
                column_index,
                column_name,
                entries,
            } => {
                writeln!(
                    f,
                    "Looking for emails in column {} ({})...",
                    column_index + 1,
                    column_name
                )?;
                writeln!(f)?;

                for entry in entries {
                    writeln!(f, "{}", entry)?;
                }

                if entries.is_empty() {
                    writeln!(f, "No emails found in the file.")
                } else {
                    writeln!(f, "Total businesses with emails: {}", entries.len())
                }
            }
        }
    }
}

use crate::domain::model::BusinessRecord;

/// One output row per email, or a single row with an empty `emails` cell.
pub fn expand_record(record: &BusinessRecord, emails: &[String]) -> Vec<BusinessRecord> {
    if emails.is_empty() {
        return vec![record.with_email("")];
    }

    emails.iter().map(|email| record.with_email(email)).collect()
}

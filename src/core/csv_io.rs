use crate::domain::model::{BusinessRecord, BusinessTable};
use crate::utils::error::Result;

/// Parse a CSV with a header row. Short rows are padded with empty values.
pub fn read_business_table(data: &[u8]) -> Result<BusinessTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = BusinessRecord::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (header.clone(), row.get(i).unwrap_or("").to_string())),
        );
        records.push(record);
    }

    Ok(BusinessTable { headers, records })
}

/// Serialize rows in `headers` order. Missing cells are written empty.
pub fn write_business_csv(headers: &[String], rows: &[BusinessRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;

    for row in rows {
        writer.write_record(headers.iter().map(|h| row.get(h).unwrap_or("")))?;
    }

    let data = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_keeps_header_order_and_pads_short_rows() {
        let data = b"place_id,name,website,phone\n1,Acme HVAC,acme.com,555-0100\n2,Cool Air\n";
        let table = read_business_table(data).unwrap();

        assert_eq!(table.headers, vec!["place_id", "name", "website", "phone"]);
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].website(), Some("acme.com"));
        assert_eq!(table.records[1].name(), "Cool Air");
        assert_eq!(table.records[1].get("phone"), Some(""));
        assert_eq!(table.records[1].website(), None);
    }

    #[test]
    fn test_quoted_fields_round_trip() {
        let data = b"name,website,address\n\"Acme, Inc.\",acme.com,\"12 \"\"Main\"\" St\"\n";
        let table = read_business_table(data).unwrap();
        assert_eq!(table.records[0].name(), "Acme, Inc.");

        let out = write_business_csv(&table.headers, &table.records).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,website,address\n\"Acme, Inc.\",acme.com,\"12 \"\"Main\"\" St\"\n"
        );
    }

    #[test]
    fn test_empty_input_has_no_headers() {
        let table = read_business_table(b"").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.records.is_empty());
    }

    #[test]
    fn test_write_header_only() {
        let headers = vec!["name".to_string(), "emails".to_string()];
        let out = write_business_csv(&headers, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,emails\n");
    }
}

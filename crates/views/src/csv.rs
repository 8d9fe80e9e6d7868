//! Client-side CSV export of the in-memory supplier array.

use chrono::{DateTime, Utc};

use vendora_suppliers::Supplier;

// Header literal the export's consumers match on, spaces included.
const HEADER: &str = "Supplier ID, Name, Email, Phone, Address, Store ID, Created At, Updated At";

/// A generated export: file name plus content, ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Export the given suppliers.
///
/// An empty array yields `None`; the caller shows a "nothing to export"
/// notice and no file is produced. Otherwise the content is a header row
/// plus one row per supplier, with comma-containing values double-quoted.
pub fn export_suppliers(suppliers: &[Supplier], now: DateTime<Utc>) -> Option<CsvExport> {
    if suppliers.is_empty() {
        return None;
    }

    let mut content = String::from(HEADER);
    for s in suppliers {
        content.push('\n');
        let row = [
            s.supplier_id.clone(),
            s.name.clone(),
            s.email.clone().unwrap_or_default(),
            s.phone.clone().unwrap_or_default(),
            s.display_address().unwrap_or_default(),
            s.store_id.to_string(),
            s.created_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            s.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ];
        let line: Vec<String> = row.iter().map(|v| quote_field(v)).collect();
        content.push_str(&line.join(","));
    }

    Some(CsvExport {
        filename: format!("suppliers_{}.csv", now.format("%Y-%m-%d")),
        content,
    })
}

/// Double-quote values containing commas or quotes, doubling inner quotes.
fn quote_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vendora_core::StoreId;

    fn supplier(slug: &str, name: &str, address: Option<&str>) -> Supplier {
        Supplier {
            supplier_id: slug.to_string(),
            id: None,
            name: name.to_string(),
            email: None,
            phone: None,
            address: address.map(str::to_string),
            street_address: None,
            city: None,
            state: None,
            zip_code: None,
            store_id: StoreId::new(),
            created_at: None,
            updated_at: None,
            is_temporary: false,
        }
    }

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 27, 9, 30, 0).unwrap()
    }

    #[test]
    fn empty_array_produces_no_file() {
        assert!(export_suppliers(&[], date()).is_none());
    }

    #[test]
    fn n_suppliers_produce_n_plus_one_lines() {
        let suppliers = vec![
            supplier("sup-1", "Acme", None),
            supplier("sup-2", "Globex", None),
            supplier("sup-3", "Initech", None),
        ];
        let export = export_suppliers(&suppliers, date()).unwrap();
        assert_eq!(export.content.lines().count(), 4);
        assert_eq!(
            export.content.lines().next().unwrap(),
            "Supplier ID, Name, Email, Phone, Address, Store ID, Created At, Updated At"
        );
    }

    #[test]
    fn comma_containing_values_are_double_quoted() {
        let suppliers = vec![supplier(
            "sup-1",
            "Acme, Inc.",
            Some("1 Main St, Springfield, IL 62704"),
        )];
        let export = export_suppliers(&suppliers, date()).unwrap();
        let row = export.content.lines().nth(1).unwrap();
        assert!(row.contains("\"Acme, Inc.\""));
        assert!(row.contains("\"1 Main St, Springfield, IL 62704\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote_field("say \"hi\", ok"), "\"say \"\"hi\"\", ok\"");
        assert_eq!(quote_field("plain"), "plain");
    }

    #[test]
    fn filename_carries_the_iso_date() {
        let export = export_suppliers(&[supplier("sup-1", "Acme", None)], date()).unwrap();
        assert_eq!(export.filename, "suppliers_2026-08-27.csv");
    }
}

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::io::Read;

/// Keys that describe a record rather than measure it. They are kept on the
/// record for tooltips and debugging but are never offered as plottable fields.
pub const DESCRIPTIVE_KEYS: &[&str] = &["name", "full_name", "description", "language", "cluster"];

/// One plotted entity: a display name plus its numeric fields, in the order
/// they first appeared in the source.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    values: Vec<(String, f64)>,
    details: Vec<(String, String)>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            details: Vec::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: f64) -> Self {
        self.values.push((field.into(), value));
        self
    }

    pub fn push_value(&mut self, field: impl Into<String>, value: f64) {
        self.values.push((field.into(), value));
    }

    pub fn push_detail(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.details.push((key.into(), text.into()));
    }

    /// Numeric value of `field`, or `None` when this record does not carry it.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|&(_, v)| v)
    }

    /// Field names carried by this record, in source order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, text)| text.as_str())
    }
}

/// Parse records from a JSON array of objects (the record-source contract).
///
/// Every object must carry a string `name`. Numeric members become plottable
/// values; string/bool members are retained as descriptive details; nulls are
/// dropped. A record that lacks a field other records have is simply missing
/// that value — rendering skips the pair.
pub fn records_from_json(value: &Value) -> Result<Vec<Record>> {
    let array = value
        .as_array()
        .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

    let mut records = Vec::with_capacity(array.len());
    for (idx, item) in array.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| anyhow!("Item {} in array is not an object", idx))?;

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("Item {} has no string 'name' field", idx))?;

        let mut record = Record::new(name);
        for (key, val) in obj {
            if key == "name" {
                continue;
            }
            match val {
                Value::Number(n) => {
                    if let Some(v) = n.as_f64() {
                        record.push_value(key, v);
                    }
                }
                Value::String(s) => record.push_detail(key, s),
                Value::Bool(b) => record.push_detail(key, b.to_string()),
                Value::Null => {}
                _ => {
                    return Err(anyhow!(
                        "Unsupported value type for field '{}' on record '{}'",
                        key,
                        name
                    ))
                }
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Parse records from CSV with a header row. A `name` column is required;
/// every other column is numeric where it parses as a number and a
/// descriptive detail otherwise.
pub fn records_from_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let name_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("name"))
        .ok_or_else(|| anyhow!("CSV input requires a 'name' column"))?;

    let mut records = Vec::new();
    for (row_idx, row) in csv_reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read CSV row {}", row_idx + 1))?;
        let name = row
            .get(name_idx)
            .ok_or_else(|| anyhow!("Row {} has no name column", row_idx + 1))?;

        let mut record = Record::new(name.trim());
        for (col, header) in headers.iter().enumerate() {
            if col == name_idx {
                continue;
            }
            let cell = row.get(col).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => record.push_value(header, v),
                Err(_) => record.push_detail(header, cell),
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Derive the selectable field list: the union of numeric field names across
/// all records, in first-seen order, minus the descriptive denylist.
pub fn numeric_fields(records: &[Record]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for record in records {
        for name in record.fields() {
            if DESCRIPTIVE_KEYS.contains(&name) {
                continue;
            }
            if !fields.iter().any(|f| f == name) {
                fields.push(name.to_string());
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_from_json_basic() {
        let value = json!([
            {"name": "A", "stars": 100, "forks": 10, "language": "Rust"},
            {"name": "B", "stars": 50, "forks": 40, "language": "Go"}
        ]);
        let records = records_from_json(&value).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].value("stars"), Some(100.0));
        assert_eq!(records[1].value("forks"), Some(40.0));
        assert_eq!(records[0].detail("language"), Some("Rust"));
        assert_eq!(records[0].value("language"), None);
    }

    #[test]
    fn test_records_from_json_missing_name() {
        let value = json!([{"stars": 100}]);
        let result = records_from_json(&value);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_records_from_json_missing_field_tolerated() {
        let value = json!([
            {"name": "A", "stars": 100},
            {"name": "B", "forks": 40}
        ]);
        let records = records_from_json(&value).unwrap();
        assert_eq!(records[0].value("forks"), None);
        assert_eq!(records[1].value("stars"), None);
    }

    #[test]
    fn test_numeric_fields_union_order() {
        let value = json!([
            {"name": "A", "stars": 100},
            {"name": "B", "stars": 50, "forks": 40, "watchers": 7}
        ]);
        let records = records_from_json(&value).unwrap();
        assert_eq!(numeric_fields(&records), vec!["stars", "forks", "watchers"]);
    }

    #[test]
    fn test_numeric_fields_denylist() {
        let mut record = Record::new("A");
        record.push_value("cluster", 3.0);
        record.push_value("stars", 10.0);
        assert_eq!(numeric_fields(&[record]), vec!["stars"]);
    }

    #[test]
    fn test_records_from_csv() {
        let csv = "name,stars,forks,language\nA,100,10,Rust\nB,50,40,Go\n";
        let records = records_from_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value("stars"), Some(100.0));
        assert_eq!(records[1].detail("language"), Some("Go"));
    }

    #[test]
    fn test_records_from_csv_no_name_column() {
        let csv = "repo,stars\nA,100\n";
        let result = records_from_csv(csv.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }
}

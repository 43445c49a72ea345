//! Filters parsed rows down to well-formed corpus records.

use serde_json::Value;

use crate::model::CorpusRecord;
use crate::table::RawRow;

/// Outcome of validating a batch of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub records: Vec<CorpusRecord>,
    pub dropped: usize,
}

/// Accept a row only when `id` and `text` are both non-empty strings.
pub fn validate_row(row: &RawRow) -> Option<CorpusRecord> {
    let id = non_empty_str(row.get("id"))?;
    let text = non_empty_str(row.get("text"))?;
    Some(CorpusRecord::new(id, text))
}

/// Validate every row, preserving order and counting what was dropped.
pub fn validate_rows<'a, I>(rows: I) -> Validated
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut validated = Validated::default();
    for row in rows {
        match validate_row(row) {
            Some(record) => validated.records.push(record),
            None => validated.dropped += 1,
        }
    }
    validated
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> RawRow {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_accepts_string_fields() {
        let record = validate_row(&row(json!({"id": "a", "text": "hi", "extra": "x"})));
        assert_eq!(record, Some(CorpusRecord::new("a", "hi")));
    }

    #[test]
    fn test_rejects_non_string_id() {
        assert_eq!(validate_row(&row(json!({"id": 5, "text": "x"}))), None);
        assert_eq!(validate_row(&row(json!({"id": null, "text": "x"}))), None);
    }

    #[test]
    fn test_rejects_missing_or_empty_fields() {
        assert_eq!(validate_row(&row(json!({"id": "a"}))), None);
        assert_eq!(validate_row(&row(json!({"text": "x"}))), None);
        assert_eq!(validate_row(&row(json!({"id": "", "text": "x"}))), None);
        assert_eq!(validate_row(&row(json!({"id": "a", "text": ""}))), None);
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        assert_eq!(validate_row(&row(json!({"ID": "a", "Text": "x"}))), None);
    }

    #[test]
    fn test_validate_rows_counts_drops() {
        let rows = vec![
            row(json!({"id": "a", "text": "one"})),
            row(json!({"id": 5, "text": "x"})),
            row(json!({"id": "b", "text": "two"})),
        ];
        let validated = validate_rows(&rows);
        assert_eq!(validated.dropped, 1);
        let ids: Vec<_> = validated.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}

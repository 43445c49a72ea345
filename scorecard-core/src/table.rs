//! Header-bearing delimited table parsing.
//!
//! Turns raw text into one [`RawRow`] per data line, keyed by the header
//! cells. Values are always JSON strings here; the validator decides what
//! counts as a usable record.

use csv::{ReaderBuilder, StringRecord};
use serde_json::{Map, Value};

/// One parsed row: header cell -> field value
pub type RawRow = Map<String, Value>;

/// Delimiters tried during detection, in preference order
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b'|', b';'];

/// Number of leading records inspected when guessing the delimiter
const DETECT_SAMPLE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub rows: Vec<RawRow>,
    /// Lines the CSV reader could not decode at all
    pub malformed: usize,
}

/// Parse `text` as a header-bearing table with an auto-detected delimiter.
pub fn parse_table(text: &str) -> ParsedTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    parse_table_with(text, detect_delimiter(text))
}

/// Parse `text` using an explicit delimiter.
pub fn parse_table_with(text: &str, delimiter: u8) -> ParsedTable {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            tracing::debug!(error = %err, "table header unreadable");
            return ParsedTable::default();
        }
    };

    let mut table = ParsedTable::default();
    for result in reader.records() {
        match result {
            Ok(record) => table.rows.push(to_row(&headers, &record)),
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed table line");
                table.malformed += 1;
            }
        }
    }
    table
}

/// Pick the candidate delimiter giving the most consistent multi-column split.
///
/// Falls back to `,` when no candidate splits the sample into two or more
/// columns.
pub fn detect_delimiter(text: &str) -> u8 {
    let mut best: Option<(u8, usize, f64)> = None;

    for &delimiter in DELIMITER_CANDIDATES.iter() {
        let counts: Vec<usize> = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes())
            .records()
            .take(DETECT_SAMPLE)
            .filter_map(Result::ok)
            .map(|record| record.len())
            .collect();

        if counts.is_empty() {
            continue;
        }

        let delta: usize = counts
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .sum();
        let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        if avg < 2.0 {
            continue;
        }

        let better = match best {
            None => true,
            Some((_, best_delta, best_avg)) => {
                delta < best_delta || (delta == best_delta && avg > best_avg)
            }
        };
        if better {
            best = Some((delimiter, delta, avg));
        }
    }

    best.map(|(delimiter, _, _)| delimiter).unwrap_or(b',')
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    let mut row = Map::new();
    for (name, value) in headers.iter().zip(record.iter()) {
        // First column wins when a header name repeats
        row.entry(name.to_string())
            .or_insert_with(|| Value::String(value.to_string()));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_table() {
        let table = parse_table("id,text\na,hello\nb,\"with, comma\"\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["id"], "a");
        assert_eq!(table.rows[1]["text"], "with, comma");
        assert_eq!(table.malformed, 0);
    }

    #[test]
    fn test_short_row_misses_keys() {
        let table = parse_table("id,text,extra\na\n");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0]["id"], "a");
        assert!(!table.rows[0].contains_key("text"));
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let table = parse_table("id,text\na,b,c,d\n");
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse_table("id,text\na,x\n\n\nb,y\n");
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_detects_tab_delimiter() {
        let text = "id\ttext\na\thello, world\nb\tbye\n";
        assert_eq!(detect_delimiter(text), b'\t');
        let table = parse_table(text);
        assert_eq!(table.rows[0]["text"], "hello, world");
    }

    #[test]
    fn test_detects_semicolon_and_pipe() {
        assert_eq!(detect_delimiter("id;text\n1;a\n2;b\n"), b';');
        assert_eq!(detect_delimiter("id|text\n1|a\n2|b\n"), b'|');
    }

    #[test]
    fn test_single_column_defaults_to_comma() {
        assert_eq!(detect_delimiter("id\na\nb\n"), b',');
    }

    #[test]
    fn test_strips_bom() {
        let table = parse_table("\u{feff}id,text\na,x\n");
        assert_eq!(table.rows[0]["id"], "a");
    }

    #[test]
    fn test_empty_input() {
        let table = parse_table("");
        assert!(table.rows.is_empty());
    }
}

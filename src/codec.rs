// 🔤 CSV Codec - Shared field encoding and decoding
// The write path and the dedup path both go through here, so a value
// that was quoted on the way out is unquoted on the way back in.

use crate::error::StoreError;
use csv::ReaderBuilder;

// ============================================================================
// ENCODE
// ============================================================================

/// Quote a field when it contains a comma, a double quote or a line break.
///
/// Embedded double quotes are doubled. Fields without special characters
/// are returned unchanged.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Escape every cell of a row.
pub fn encode_row<S: AsRef<str>>(cells: &[S]) -> Vec<String> {
    cells.iter().map(|c| escape_field(c.as_ref())).collect()
}

// ============================================================================
// DECODE
// ============================================================================

/// Parse RFC 4180 text into rows of unquoted cells.
///
/// No header handling is applied, rows may differ in width and blank lines
/// yield nothing. Input is already UTF-8 and width checks are off, so an
/// error here means the `csv` reader itself failed.
pub fn decode_records(content: &str) -> Result<Vec<Vec<String>>, StoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();

        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_untouched() {
        assert_eq!(escape_field("Hoa 1"), "Hoa 1");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_comma_is_quoted() {
        assert_eq!(escape_field("123 St, Suite 4"), "\"123 St, Suite 4\"");
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(escape_field("The \"Oaks\""), "\"The \"\"Oaks\"\"\"");
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        assert_eq!(escape_field("56 Schooner\nUnit 2"), "\"56 Schooner\nUnit 2\"");
        assert_eq!(escape_field("a\rb"), "\"a\rb\"");
    }

    #[test]
    fn test_encode_row_escapes_each_cell() {
        let row = encode_row(&["1", "Oak, Inc", "x"]);
        assert_eq!(row, vec!["1", "\"Oak, Inc\"", "x"]);
    }

    #[test]
    fn test_decode_recovers_quoted_cells() {
        let cells = ["7", "Oak, \"West\"", "56 Schooner\nUnit 2", "UNAVAILABLE"];
        let line = encode_row(&cells).join(",");

        let rows = decode_records(&format!("{}\n", line)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], cells);
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let rows = decode_records("\nID,Name\n\n1,A\n").unwrap();
        assert_eq!(rows, vec![vec!["ID", "Name"], vec!["1", "A"]]);
    }

    #[test]
    fn test_decode_allows_ragged_rows() {
        let rows = decode_records("a,b,c\nd\n").unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_decode_empty_content() {
        assert!(decode_records("").unwrap().is_empty());
    }
}

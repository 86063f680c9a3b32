//! Spreadsheet import
//!
//! Turns comma-separated text into journey columns: one column per header
//! cell, one card per non-empty cell underneath.

mod csv;
mod table;

pub use csv::{parse_csv, parse_line};
pub use table::{columns_from_table, MIN_ROWS};

use tracing::info;

use crate::errors::Result;
use crate::schemas::Column;

/// Parse `text` and build columns using `header_row` (0-based) as titles.
///
/// # Errors
/// * `Import` - If there are fewer than two rows or the header row is out of range
pub fn import_csv(text: &str, header_row: usize) -> Result<Vec<Column>> {
    let rows = parse_csv(text);
    let columns = columns_from_table(&rows, header_row)?;
    info!(
        rows = rows.len(),
        columns = columns.len(),
        "Imported spreadsheet"
    );
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::CardTag;

    #[test]
    fn test_import_csv_end_to_end() {
        let text = "Discover,Sign up\r\nSees ad,Enters email\r\n\r\nReads review,\n";
        let columns = import_csv(text, 0).unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].title, "Discover");
        assert_eq!(columns[0].cards.len(), 2);
        assert_eq!(columns[1].cards.len(), 1);
        assert_eq!(columns[1].cards[0].tags, vec![CardTag::User]);
    }

    #[test]
    fn test_import_csv_single_row_fails() {
        let err = import_csv("Only,Headers\n\n", 0).unwrap_err();
        assert_eq!(err.code(), "IMPORT_ERROR");
    }
}

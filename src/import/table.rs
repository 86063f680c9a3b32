//! Table to column conversion

use crate::errors::{JourneyError, Result};
use crate::schemas::{new_id, Card, CardTag, Column};

/// A header row plus at least one data row
pub const MIN_ROWS: usize = 2;

/// Build columns from parsed rows, using `rows[header_row]` as titles.
///
/// Rows above the header are ignored. Short rows simply contribute no card to
/// the missing positions.
///
/// # Errors
/// * `Import` - If there are fewer than [`MIN_ROWS`] rows, or no data row
///   follows `header_row`
pub fn columns_from_table(rows: &[Vec<String>], header_row: usize) -> Result<Vec<Column>> {
    if rows.len() < MIN_ROWS {
        return Err(JourneyError::Import(format!(
            "Spreadsheet must have at least {} rows (header + data), found {}",
            MIN_ROWS,
            rows.len()
        )));
    }
    if header_row + 1 >= rows.len() {
        return Err(JourneyError::Import(format!(
            "Header row {} is out of range; choose a row between 1 and {}",
            header_row + 1,
            rows.len() - 1
        )));
    }

    let headers = &rows[header_row];
    let data = &rows[header_row + 1..];

    let columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let cards = data
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .map(|cell| Card::new(new_id(), cell.to_string()).with_tags(vec![CardTag::User]))
                .collect();

            let title = if header.trim().is_empty() {
                format!("Column {}", index + 1)
            } else {
                header.trim().to_string()
            };
            Column::new(new_id(), title).with_cards(cards)
        })
        .filter(|column| !column.title.trim().is_empty() || !column.cards.is_empty())
        .collect();

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_one_column_per_header() {
        let rows = table(&[&["Discover", "Buy"], &["Ad", "Checkout"], &["Blog", ""]]);
        let columns = columns_from_table(&rows, 0).unwrap();

        assert_eq!(columns.len(), 2);
        let titles: Vec<&str> = columns[0].cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Ad", "Blog"]);
        assert_eq!(columns[1].cards.len(), 1);
        assert!(columns
            .iter()
            .flat_map(|c| &c.cards)
            .all(|card| card.tags == vec![CardTag::User]));
    }

    #[test]
    fn test_blank_header_gets_numbered_title() {
        let rows = table(&[&["Discover", ""], &["Ad", "Call"]]);
        let columns = columns_from_table(&rows, 0).unwrap();
        assert_eq!(columns[1].title, "Column 2");
    }

    #[test]
    fn test_rows_above_header_are_ignored() {
        let rows = table(&[&["Report"], &["Step A", "Step B"], &["x", "y"]]);
        let columns = columns_from_table(&rows, 1).unwrap();

        assert_eq!(columns[0].title, "Step A");
        assert_eq!(columns[0].cards.len(), 1);
        assert_eq!(columns[1].cards[0].title, "y");
    }

    #[test]
    fn test_short_rows_leave_gaps() {
        let rows = table(&[&["A", "B", "C"], &["1"], &["2", "3"]]);
        let columns = columns_from_table(&rows, 0).unwrap();
        assert_eq!(columns[0].cards.len(), 2);
        assert_eq!(columns[1].cards.len(), 1);
        assert!(columns[2].cards.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let rows = table(&[&["A", "B"], &["1", "2"], &["3", "4"]]);
        let columns = columns_from_table(&rows, 0).unwrap();
        let mut ids: Vec<&str> = columns
            .iter()
            .flat_map(|c| std::iter::once(c.id.as_str()).chain(c.cards.iter().map(|k| k.id.as_str())))
            .collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_too_few_rows() {
        let err = columns_from_table(&table(&[&["A"]]), 0).unwrap_err();
        assert!(matches!(err, JourneyError::Import(_)));
    }

    #[test]
    fn test_header_row_without_data_below() {
        let rows = table(&[&["A"], &["1"]]);
        let err = columns_from_table(&rows, 1).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}

//! Read-side tag filter

use crate::schemas::{Column, TagFilter};

/// Project the columns through a tag filter.
///
/// Every column is kept, even when no card survives, so the board layout
/// does not shift while filtering.
pub fn filter_columns(columns: &[Column], filter: TagFilter) -> Vec<Column> {
    match filter {
        TagFilter::All => columns.to_vec(),
        TagFilter::Tag(tag) => columns
            .iter()
            .map(|column| {
                let cards = column.cards.iter().filter(|c| c.has_tag(tag)).cloned().collect();
                column.clone().with_cards(cards)
            })
            .collect(),
    }
}

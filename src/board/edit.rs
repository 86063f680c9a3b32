//! Column and card edits
//!
//! Every edit computes a new column list for the persona; the reducer then
//! swaps it in through the single replace-columns primitive. A `None` result
//! means the referenced column or card does not exist.

use crate::schemas::{new_id, Card, CardTag, Column};

/// Title given to a freshly added column
pub const NEW_COLUMN_TITLE: &str = "New Step";

/// Title given to a freshly added card
pub const NEW_CARD_TITLE: &str = "New action";

/// Partial update for a column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnUpdate {
    /// Trimmed; blank keeps the old title
    pub title: Option<String>,
    /// `Some(None)` clears the workflow
    pub workflow_id: Option<Option<String>>,
}

/// Partial update for a card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardUpdate {
    /// Trimmed; blank keeps the old title
    pub title: Option<String>,
    /// `Some(None)` or a blank description clears it
    pub description: Option<Option<String>>,
    pub tags: Option<Vec<CardTag>>,
}

fn replace_column<F>(columns: &[Column], column_id: &str, f: F) -> Option<Vec<Column>>
where
    F: FnOnce(Column) -> Option<Column>,
{
    let position = columns.iter().position(|c| c.id == column_id)?;
    let replacement = f(columns[position].clone())?;
    let mut next = columns.to_vec();
    next[position] = replacement;
    Some(next)
}

fn replace_card<F>(columns: &[Column], column_id: &str, card_id: &str, f: F) -> Option<Vec<Column>>
where
    F: FnOnce(Card) -> Card,
{
    replace_column(columns, column_id, |column| {
        let position = column.cards.iter().position(|c| c.id == card_id)?;
        let mut cards = column.cards.clone();
        cards[position] = f(cards[position].clone());
        Some(column.with_cards(cards))
    })
}

/// Append an empty column; returns the new list and the new column's id.
pub fn add_column(columns: &[Column], title: Option<&str>) -> (Vec<Column>, String) {
    let id = new_id();
    let column = Column::new(id.clone(), NEW_COLUMN_TITLE.to_string()).with_title(title.unwrap_or(""));
    let mut next = columns.to_vec();
    next.push(column);
    (next, id)
}

pub fn update_column(columns: &[Column], column_id: &str, update: &ColumnUpdate) -> Option<Vec<Column>> {
    replace_column(columns, column_id, |mut column| {
        if let Some(title) = &update.title {
            column = column.with_title(title);
        }
        if let Some(workflow_id) = &update.workflow_id {
            column = column.with_workflow(workflow_id.clone());
        }
        Some(column)
    })
}

pub fn delete_column(columns: &[Column], column_id: &str) -> Option<Vec<Column>> {
    if !columns.iter().any(|c| c.id == column_id) {
        return None;
    }
    Some(columns.iter().filter(|c| c.id != column_id).cloned().collect())
}

/// Append a card tagged `user` to the column; returns the new list and card id.
pub fn add_card(columns: &[Column], column_id: &str, title: Option<&str>) -> Option<(Vec<Column>, String)> {
    let id = new_id();
    let card = Card::new(id.clone(), NEW_CARD_TITLE.to_string())
        .with_title(title.unwrap_or(""))
        .with_tags(vec![CardTag::User]);
    let next = replace_column(columns, column_id, |column| {
        let mut cards = column.cards.clone();
        cards.push(card);
        Some(column.with_cards(cards))
    })?;
    Some((next, id))
}

pub fn update_card(
    columns: &[Column],
    column_id: &str,
    card_id: &str,
    update: &CardUpdate,
) -> Option<Vec<Column>> {
    replace_card(columns, column_id, card_id, |mut card| {
        if let Some(title) = &update.title {
            card = card.with_title(title);
        }
        if let Some(description) = &update.description {
            card = card.with_description(description.as_deref());
        }
        if let Some(tags) = &update.tags {
            card = card.with_tags(tags.clone());
        }
        card
    })
}

pub fn toggle_card_tag(columns: &[Column], column_id: &str, card_id: &str, tag: CardTag) -> Option<Vec<Column>> {
    replace_card(columns, column_id, card_id, |card| card.with_tag_toggled(tag))
}

pub fn delete_card(columns: &[Column], column_id: &str, card_id: &str) -> Option<Vec<Column>> {
    replace_column(columns, column_id, |column| {
        column.card(card_id)?;
        let cards = column.cards.iter().filter(|c| c.id != card_id).cloned().collect();
        Some(column.with_cards(cards))
    })
}

/// Existing columns followed by the imported ones; never a replace.
pub fn append_columns(columns: &[Column], imported: &[Column]) -> Vec<Column> {
    columns.iter().chain(imported.iter()).cloned().collect()
}

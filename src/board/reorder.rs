//! Drag-and-drop reorder and move logic
//!
//! Pure functions: every result is a fresh column list and the input is left
//! untouched. Columns that a move does not involve are cloned as-is.

use serde::{Deserialize, Serialize};

use crate::schemas::Column;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Column,
    Card,
}

/// A slot inside a droppable container
///
/// For cards the container is the column id. Columns all live in one board
/// container whose id only matters for the same-location check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub container_id: String,
    pub index: usize,
}

impl Location {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Location {
            container_id: container_id.into(),
            index,
        }
    }
}

/// A finished drag gesture as reported by the drag library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: Location,
    /// `None` when the drop was cancelled
    pub destination: Option<Location>,
    pub kind: ItemKind,
}

impl DragEvent {
    /// Drag of a column between two board positions
    pub fn column(board_id: &str, from: usize, to: usize) -> Self {
        DragEvent {
            source: Location::new(board_id, from),
            destination: Some(Location::new(board_id, to)),
            kind: ItemKind::Column,
        }
    }

    /// Drag of a card from one column slot to another
    pub fn card(from: Location, to: Location) -> Self {
        DragEvent {
            source: from,
            destination: Some(to),
            kind: ItemKind::Card,
        }
    }
}

/// Remove the element at `from` and insert it at `to` (post-removal index).
///
/// Returns `None` when `from` is out of range or `to` is past the end of the
/// shortened list; the drag library never reports such indices.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= list.len() || to >= list.len() {
        return None;
    }
    let mut next = list.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// Apply a drag event to a persona's columns.
///
/// Returns `None` when the state is unchanged: cancelled drop, drop back onto
/// the source slot, unknown column ids, or indices outside the lists.
pub fn apply_drag(columns: &[Column], event: &DragEvent) -> Option<Vec<Column>> {
    let destination = event.destination.as_ref()?;

    if *destination == event.source {
        return None;
    }

    match event.kind {
        ItemKind::Column => reorder(columns, event.source.index, destination.index),
        ItemKind::Card => move_card(columns, &event.source, destination),
    }
}

fn move_card(columns: &[Column], source: &Location, destination: &Location) -> Option<Vec<Column>> {
    let source_column = columns.iter().find(|c| c.id == source.container_id)?;
    let dest_column = columns.iter().find(|c| c.id == destination.container_id)?;

    if source_column.id == dest_column.id {
        let cards = reorder(&source_column.cards, source.index, destination.index)?;
        return Some(
            columns
                .iter()
                .map(|c| {
                    if c.id == source_column.id {
                        c.clone().with_cards(cards.clone())
                    } else {
                        c.clone()
                    }
                })
                .collect(),
        );
    }

    if source.index >= source_column.cards.len() || destination.index > dest_column.cards.len() {
        return None;
    }

    let mut source_cards = source_column.cards.clone();
    let mut dest_cards = dest_column.cards.clone();
    let moved = source_cards.remove(source.index);
    dest_cards.insert(destination.index, moved);

    Some(
        columns
            .iter()
            .map(|c| {
                if c.id == source_column.id {
                    c.clone().with_cards(source_cards.clone())
                } else if c.id == dest_column.id {
                    c.clone().with_cards(dest_cards.clone())
                } else {
                    c.clone()
                }
            })
            .collect(),
    )
}

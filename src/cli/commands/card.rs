//! Card commands
//!
//! Columns and cards are addressed by id or 1-based position.

use std::path::Path;

use crate::board::{CardUpdate, DragEvent, Location};
use crate::cli::CardCommand;
use crate::domain::Command;
use crate::errors::Result;
use crate::schemas::Persona;

use super::context::{card_index, column_index, position_index, Workspace};

pub fn run(cwd: Option<&Path>, dry_run: bool, action: CardCommand) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;
    let persona = workspace.active_persona()?;

    let command = match action {
        CardCommand::Add { column, title } => Command::AddCard {
            column_id: persona.columns[column_index(persona, &column)?].id.clone(),
            title,
        },
        CardCommand::Edit {
            column,
            card,
            title,
            description,
            clear_description,
        } => {
            let (column_id, card_id) = resolve(persona, &column, &card)?;
            let description = if clear_description {
                Some(None)
            } else {
                description.map(Some)
            };
            Command::UpdateCard {
                column_id,
                card_id,
                update: CardUpdate {
                    title,
                    description,
                    tags: None,
                },
            }
        }
        CardCommand::Tag { column, card, tag } => {
            let (column_id, card_id) = resolve(persona, &column, &card)?;
            Command::ToggleCardTag {
                column_id,
                card_id,
                tag,
            }
        }
        CardCommand::Delete { column, card } => {
            let (column_id, card_id) = resolve(persona, &column, &card)?;
            Command::DeleteCard { column_id, card_id }
        }
        CardCommand::Move {
            column,
            card,
            to_column,
            position,
        } => Command::Drag(move_event(
            persona,
            &column,
            &card,
            to_column.as_deref(),
            position,
        )?),
    };

    let outcome = workspace.apply(command)?;
    if let Some(id) = outcome.created_id() {
        println!("Added card {}", id);
    }
    Ok(())
}

fn resolve(persona: &Persona, column: &str, card: &str) -> Result<(String, String)> {
    let column = column_index(persona, column)?;
    let card = card_index(persona, column, card)?;
    let column = &persona.columns[column];
    Ok((column.id.clone(), column.cards[card].id.clone()))
}

/// Build the drag for moving a card; the position defaults to the end.
fn move_event(
    persona: &Persona,
    column: &str,
    card: &str,
    to_column: Option<&str>,
    position: Option<usize>,
) -> Result<DragEvent> {
    let source_column = column_index(persona, column)?;
    let source_card = card_index(persona, source_column, card)?;
    let dest_column = match to_column {
        Some(key) => column_index(persona, key)?,
        None => source_column,
    };

    let dest_len = persona.columns[dest_column].cards.len();
    // Within one column the moved card is not counted as a slot
    let slots = if dest_column == source_column {
        dest_len
    } else {
        dest_len + 1
    };
    let index = match position {
        Some(position) => position_index(position, slots)?,
        None => slots - 1,
    };

    Ok(DragEvent::card(
        Location::new(persona.columns[source_column].id.clone(), source_card),
        Location::new(persona.columns[dest_column].id.clone(), index),
    ))
}

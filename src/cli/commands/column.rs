//! Column commands

use std::path::Path;

use crate::board::{ColumnUpdate, DragEvent};
use crate::cli::ColumnCommand;
use crate::domain::Command;
use crate::errors::Result;

use super::context::{column_id, column_index, position_index, Workspace};

/// Identifier of the board container used for column drags
const BOARD_ID: &str = "board";

pub fn run(cwd: Option<&Path>, dry_run: bool, action: ColumnCommand) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;
    let persona = workspace.active_persona()?;

    let command = match action {
        ColumnCommand::Add { title } => Command::AddColumn { title },
        ColumnCommand::Rename { column, title } => Command::UpdateColumn {
            column_id: column_id(persona, &column)?,
            update: ColumnUpdate {
                title: Some(title),
                ..ColumnUpdate::default()
            },
        },
        ColumnCommand::Delete { column } => Command::DeleteColumn {
            column_id: column_id(persona, &column)?,
        },
        ColumnCommand::Move { column, to } => {
            let from = column_index(persona, &column)?;
            let to = position_index(to, persona.columns.len())?;
            Command::Drag(DragEvent::column(BOARD_ID, from, to))
        }
    };

    let outcome = workspace.apply(command)?;
    if let Some(id) = outcome.created_id() {
        println!("Added column {}", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::test_support::init_root;
    use crate::schemas::Column;
    use tempfile::TempDir;

    fn columns(temp: &TempDir) -> Vec<Column> {
        Workspace::open(Some(temp.path()), false)
            .unwrap()
            .active_persona()
            .unwrap()
            .columns
            .clone()
    }

    fn titles(temp: &TempDir) -> Vec<String> {
        columns(temp).into_iter().map(|c| c.title).collect()
    }

    #[test]
    fn test_add_rename_delete() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(Some(temp.path()), false, ColumnCommand::Add { title: None }).unwrap();
        assert_eq!(titles(&temp).last().map(String::as_str), Some("New Step"));

        run(
            Some(temp.path()),
            false,
            ColumnCommand::Rename { column: "6".to_string(), title: "Renewal".to_string() },
        )
        .unwrap();
        assert_eq!(titles(&temp)[5], "Renewal");

        run(Some(temp.path()), false, ColumnCommand::Delete { column: "col-1".to_string() }).unwrap();
        let after = titles(&temp);
        assert_eq!(after.len(), 5);
        assert_eq!(after[0], "Registration & Authentication");
    }

    #[test]
    fn test_move_column() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(Some(temp.path()), false, ColumnCommand::Move { column: "col-1".to_string(), to: 2 }).unwrap();
        let ids: Vec<String> = columns(&temp).into_iter().map(|c| c.id).collect();
        assert_eq!(ids[..3], ["col-2", "col-1", "col-3"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        let err = run(Some(temp.path()), false, ColumnCommand::Move { column: "1".to_string(), to: 9 }).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}

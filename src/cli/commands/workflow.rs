//! Workflow commands

use std::path::Path;

use crate::board::{workflow_groups, GroupEdit, WorkflowGroup};
use crate::cli::{Side, WorkflowCommand};
use crate::domain::{Command, WorkflowUpdate};
use crate::errors::{JourneyError, Result};
use crate::schemas::{Persona, NEW_WORKFLOW_COLOR};

use super::context::{column_index, Workspace};

pub fn run(cwd: Option<&Path>, dry_run: bool, action: WorkflowCommand) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;
    let persona = workspace.active_persona()?;

    let command = match action {
        WorkflowCommand::Add { title, color, column } => Command::AddWorkflow {
            title,
            color: Some(color.unwrap_or_else(|| NEW_WORKFLOW_COLOR.to_string())),
            assign_to: column.map(|key| column_index(persona, &key)).transpose()?,
        },
        WorkflowCommand::Update {
            id,
            title,
            color,
            clear_color,
        } => {
            require_workflow(persona, &id)?;
            let color = if clear_color { Some(None) } else { color.map(Some) };
            Command::UpdateWorkflow {
                workflow_id: id,
                update: WorkflowUpdate { title, color },
            }
        }
        WorkflowCommand::Assign { column, workflow } => {
            if let Some(id) = &workflow {
                require_workflow(persona, id)?;
            }
            Command::SetColumnWorkflow {
                column_index: column_index(persona, &column)?,
                workflow_id: workflow,
            }
        }
        WorkflowCommand::Extend { column, side } => {
            let edit = match side {
                Side::Left => GroupEdit::ExtendLeft,
                Side::Right => GroupEdit::ExtendRight,
            };
            group_edit(persona, &column, edit)?
        }
        WorkflowCommand::Retract { column, side } => {
            let edit = match side {
                Side::Left => GroupEdit::RetractLeft,
                Side::Right => GroupEdit::RetractRight,
            };
            group_edit(persona, &column, edit)?
        }
    };

    let outcome = workspace.apply(command)?;
    if let Some(id) = outcome.created_id() {
        println!("Created workflow {}", id);
    }
    Ok(())
}

fn require_workflow(persona: &Persona, id: &str) -> Result<()> {
    match persona.workflow(id) {
        Some(_) => Ok(()),
        None => Err(JourneyError::NotFound(format!("Workflow {} not found", id))),
    }
}

/// The band containing the given column
fn group_for(persona: &Persona, column: &str) -> Result<WorkflowGroup> {
    let index = column_index(persona, column)?;
    workflow_groups(&persona.columns)
        .into_iter()
        .find(|g| g.contains(index))
        .ok_or_else(|| JourneyError::NotFound(format!("Column {} not found", column)))
}

fn group_edit(persona: &Persona, column: &str, edit: GroupEdit) -> Result<Command> {
    let group = group_for(persona, column)?;
    if !group.is_assigned() {
        return Err(JourneyError::InvalidArgument(format!(
            "Column {} has no workflow",
            column
        )));
    }
    if !group.allows(edit, persona.columns.len()) {
        return Err(JourneyError::InvalidArgument(format!(
            "{:?} is not allowed for the band spanning columns {}-{}",
            edit,
            group.start,
            group.end.saturating_sub(1)
        )));
    }
    Ok(Command::EditWorkflowGroup { group, edit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::test_support::init_root;
    use crate::domain::sample_state;
    use tempfile::TempDir;

    fn persona(temp: &TempDir) -> Persona {
        Workspace::open(Some(temp.path()), false)
            .unwrap()
            .active_persona()
            .unwrap()
            .clone()
    }

    fn workflow_ids(persona: &Persona) -> Vec<Option<&str>> {
        persona.columns.iter().map(|c| c.workflow_id.as_deref()).collect()
    }

    #[test]
    fn test_add_workflow_assigned_to_column() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(
            Some(temp.path()),
            false,
            WorkflowCommand::Add { title: "Renewal".to_string(), color: None, column: Some("5".to_string()) },
        )
        .unwrap();

        let persona = persona(&temp);
        let added = persona.workflows.last().unwrap();
        assert_eq!(added.title, "Renewal");
        assert!(added.id.starts_with("wf-"));
        assert_eq!(added.color.as_deref(), Some(NEW_WORKFLOW_COLOR));
        assert_eq!(persona.columns[4].workflow_id.as_deref(), Some(added.id.as_str()));
    }

    #[test]
    fn test_extend_and_retract() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(Some(temp.path()), false, WorkflowCommand::Extend { column: "1".to_string(), side: Side::Right }).unwrap();
        assert_eq!(
            workflow_ids(&persona(&temp)),
            vec![
                Some("wf-onboarding"),
                Some("wf-onboarding"),
                Some("wf-onboarding"),
                Some("wf-usage"),
                Some("wf-support"),
            ]
        );

        run(Some(temp.path()), false, WorkflowCommand::Retract { column: "col-2".to_string(), side: Side::Left })
            .unwrap();
        assert_eq!(workflow_ids(&persona(&temp))[0], None);
    }

    #[test]
    fn test_disallowed_edit_is_rejected() {
        let state = sample_state();
        let persona = state.active_persona().unwrap();

        let err = group_edit(persona, "col-5", GroupEdit::ExtendRight).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(group_edit(persona, "col-5", GroupEdit::RetractLeft).is_err());
        assert!(group_edit(persona, "col-5", GroupEdit::ExtendLeft).is_ok());
    }

    #[test]
    fn test_assign_and_clear() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(
            Some(temp.path()),
            false,
            WorkflowCommand::Assign { column: "3".to_string(), workflow: Some("wf-support".to_string()) },
        )
        .unwrap();
        assert_eq!(workflow_ids(&persona(&temp))[2], Some("wf-support"));

        run(Some(temp.path()), false, WorkflowCommand::Assign { column: "3".to_string(), workflow: None }).unwrap();
        assert_eq!(workflow_ids(&persona(&temp))[2], None);

        let err = run(
            Some(temp.path()),
            false,
            WorkflowCommand::Assign { column: "3".to_string(), workflow: Some("wf-ghost".to_string()) },
        )
        .unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}

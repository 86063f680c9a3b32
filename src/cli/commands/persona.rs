//! Persona commands

use std::path::Path;

use serde::Serialize;

use crate::cli::PersonaCommand;
use crate::domain::{Command, PersonaUpdate};
use crate::errors::{JourneyError, Result};
use crate::schemas::Project;

use super::context::{to_json, Workspace};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonaSummary<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    goals: &'a [String],
    pain_points: &'a [String],
    columns: usize,
    cards: usize,
    active: bool,
}

pub fn run(cwd: Option<&Path>, dry_run: bool, action: PersonaCommand) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;

    match action {
        PersonaCommand::List { json } => list(workspace.active_project()?, json),
        PersonaCommand::Create { name } => {
            workspace.active_project()?;
            let outcome = workspace.apply(Command::CreatePersona { name })?;
            if let Some(id) = outcome.created_id() {
                println!("Created persona {}", id);
            }
            Ok(())
        }
        PersonaCommand::Select { id } => {
            require_persona(workspace.active_project()?, &id)?;
            workspace.apply(Command::SelectPersona { persona_id: id })?;
            Ok(())
        }
        PersonaCommand::Update {
            id,
            name,
            description,
            goals,
            pain_points,
        } => {
            require_persona(workspace.active_project()?, &id)?;
            let update = PersonaUpdate {
                name,
                description,
                goals: (!goals.is_empty()).then_some(goals),
                pain_points: (!pain_points.is_empty()).then_some(pain_points),
            };
            workspace.apply(Command::UpdatePersona { persona_id: id, update })?;
            Ok(())
        }
        PersonaCommand::Delete { id, force } => {
            let project = workspace.active_project()?;
            require_persona(project, &id)?;
            if project.personas.len() == 1 && !force {
                return Err(JourneyError::InvalidArgument(
                    "Refusing to delete the last persona; pass --force to do it anyway".to_string(),
                ));
            }
            workspace.apply(Command::DeletePersona { persona_id: id })?;
            Ok(())
        }
    }
}

fn require_persona(project: &Project, id: &str) -> Result<()> {
    match project.persona(id) {
        Some(_) => Ok(()),
        None => Err(JourneyError::NotFound(format!(
            "Persona {} not found in project {}",
            id, project.name
        ))),
    }
}

fn list(project: &Project, json: bool) -> Result<()> {
    let active = project.active_persona_id.as_deref();
    let summaries: Vec<PersonaSummary> = project
        .personas
        .iter()
        .map(|p| PersonaSummary {
            id: &p.id,
            name: &p.name,
            description: &p.description,
            goals: &p.goals,
            pain_points: &p.pain_points,
            columns: p.columns.len(),
            cards: p.card_count(),
            active: active == Some(p.id.as_str()),
        })
        .collect();

    if json {
        println!("{}", to_json(&summaries)?);
        return Ok(());
    }
    for summary in summaries {
        let marker = if summary.active { "*" } else { " " };
        println!(
            "{} {}  {}  ({} steps, {} cards)",
            marker, summary.id, summary.name, summary.columns, summary.cards
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::test_support::init_root;
    use crate::schemas::AppState;
    use tempfile::TempDir;

    fn state(temp: &TempDir) -> AppState {
        Workspace::open(Some(temp.path()), false)
            .unwrap()
            .store
            .state()
            .clone()
    }

    #[test]
    fn test_create_and_update_persona() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        run(Some(temp.path()), false, PersonaCommand::Create { name: None }).unwrap();
        let created = state(&temp).active_persona().unwrap().clone();
        assert_eq!(created.name, "Persona 2");

        run(
            Some(temp.path()),
            false,
            PersonaCommand::Update {
                id: created.id.clone(),
                name: Some("Sam".to_string()),
                description: None,
                goals: vec!["Pay fast".to_string()],
                pain_points: Vec::new(),
            },
        )
        .unwrap();

        let updated = state(&temp).active_persona().unwrap().clone();
        assert_eq!(updated.name, "Sam");
        assert_eq!(updated.goals, vec!["Pay fast".to_string()]);
        assert_eq!(updated.pain_points, created.pain_points);
    }

    #[test]
    fn test_delete_last_persona_needs_force() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        let delete = |force| PersonaCommand::Delete { id: "persona-1".to_string(), force };
        assert!(run(Some(temp.path()), false, delete(false)).is_err());

        run(Some(temp.path()), false, delete(true)).unwrap();
        let after = state(&temp);
        let project = after.active_project().unwrap();
        assert!(project.personas.is_empty());
        assert!(project.active_persona_id.is_none());
    }

    #[test]
    fn test_select_unknown_persona() {
        let temp = TempDir::new().unwrap();
        init_root(temp.path());

        let err = run(Some(temp.path()), false, PersonaCommand::Select { id: "ghost".to_string() }).unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}

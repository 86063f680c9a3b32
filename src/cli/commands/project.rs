//! Project commands

use std::path::Path;

use serde::Serialize;

use crate::cli::ProjectCommand;
use crate::domain::Command;
use crate::errors::{JourneyError, Result};
use crate::schemas::AppState;

use super::context::{to_json, Workspace};

#[derive(Debug, Serialize)]
struct ProjectSummary<'a> {
    id: &'a str,
    name: &'a str,
    personas: usize,
    active: bool,
}

pub fn run(cwd: Option<&Path>, dry_run: bool, action: ProjectCommand) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;

    match action {
        ProjectCommand::List { json } => list(workspace.store.state(), json),
        ProjectCommand::Create { name } => {
            let outcome = workspace.apply(Command::CreateProject { name })?;
            if let Some(id) = outcome.created_id() {
                println!("Created project {}", id);
            }
            Ok(())
        }
        ProjectCommand::Select { id } => {
            require_project(workspace.store.state(), &id)?;
            workspace.apply(Command::SelectProject { project_id: id })?;
            Ok(())
        }
        ProjectCommand::Rename { id, name } => {
            require_project(workspace.store.state(), &id)?;
            workspace.apply(Command::RenameProject { project_id: id, name })?;
            Ok(())
        }
        ProjectCommand::Delete { id, force } => {
            let state = workspace.store.state();
            require_project(state, &id)?;
            if state.projects.len() == 1 && !force {
                return Err(JourneyError::InvalidArgument(
                    "Refusing to delete the last project; pass --force to do it anyway".to_string(),
                ));
            }
            workspace.apply(Command::DeleteProject { project_id: id })?;
            Ok(())
        }
    }
}

fn require_project(state: &AppState, id: &str) -> Result<()> {
    match state.project(id) {
        Some(_) => Ok(()),
        None => Err(JourneyError::NotFound(format!("Project {} not found", id))),
    }
}

fn list(state: &AppState, json: bool) -> Result<()> {
    let active = state.active_project_id.as_deref();
    let summaries: Vec<ProjectSummary> = state
        .projects
        .iter()
        .map(|p| ProjectSummary {
            id: &p.id,
            name: &p.name,
            personas: p.personas.len(),
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
            "{} {}  {}  ({} personas)",
            marker, summary.id, summary.name, summary.personas
        );
    }
    Ok(())
}

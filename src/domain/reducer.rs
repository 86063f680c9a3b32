//! State reducer
//!
//! Pure function from (state, command) to the next state snapshot.

use crate::board::{self, append_columns};
use crate::schemas::{new_workflow_id, AppState, Column, Workflow};

use super::commands::{Command, PersonaUpdate, WorkflowUpdate};
use super::defaults::{default_persona, default_project};

/// Result of reducing a command
#[derive(Debug)]
pub enum ReduceResult {
    /// The command produced a new snapshot
    Changed {
        /// The next application state
        next_state: AppState,
        /// Id of the project, persona, column, card or workflow the command created
        created_id: Option<String>,
    },
    /// Nothing to do; the state stays as it was
    Unchanged {
        /// Why the command had no effect
        reason: String,
    },
}

impl ReduceResult {
    /// Check if the command changed the state
    pub fn is_changed(&self) -> bool {
        matches!(self, ReduceResult::Changed { .. })
    }

    /// Get the next state if the command changed anything
    pub fn state(self) -> Option<AppState> {
        match self {
            ReduceResult::Changed { next_state, .. } => Some(next_state),
            ReduceResult::Unchanged { .. } => None,
        }
    }

    /// Get the id of the created entity, if any
    pub fn created_id(&self) -> Option<&str> {
        match self {
            ReduceResult::Changed { created_id, .. } => created_id.as_deref(),
            ReduceResult::Unchanged { .. } => None,
        }
    }

    /// Get the reason the command was a no-op
    pub fn reason(&self) -> Option<&str> {
        match self {
            ReduceResult::Changed { .. } => None,
            ReduceResult::Unchanged { reason } => Some(reason),
        }
    }
}

fn changed(next_state: AppState) -> ReduceResult {
    ReduceResult::Changed {
        next_state,
        created_id: None,
    }
}

fn created(next_state: AppState, id: String) -> ReduceResult {
    ReduceResult::Changed {
        next_state,
        created_id: Some(id),
    }
}

fn unchanged(reason: impl Into<String>) -> ReduceResult {
    ReduceResult::Unchanged {
        reason: reason.into(),
    }
}

/// Apply a command to the state, returning a new snapshot.
///
/// The input state is never mutated. Commands that reference missing entities,
/// or that would not alter anything, yield `Unchanged`.
pub fn reduce(state: &AppState, command: &Command) -> ReduceResult {
    match command {
        Command::SelectProject { project_id } => select_project(state, project_id),
        Command::CreateProject { name } => create_project(state, name.as_deref()),
        Command::DeleteProject { project_id } => delete_project(state, project_id),
        Command::RenameProject { project_id, name } => rename_project(state, project_id, name),

        Command::SelectPersona { persona_id } => select_persona(state, persona_id),
        Command::CreatePersona { name } => create_persona(state, name.as_deref()),
        Command::DeletePersona { persona_id } => delete_persona(state, persona_id),
        Command::UpdatePersona { persona_id, update } => update_persona(state, persona_id, update),

        Command::ReplaceColumns { columns } => edit_columns(state, |_| Some((columns.clone(), None))),
        Command::AddColumn { title } => edit_columns(state, |columns| {
            let (next, id) = board::add_column(columns, title.as_deref());
            Some((next, Some(id)))
        }),
        Command::UpdateColumn { column_id, update } => {
            edit_columns(state, |columns| board::update_column(columns, column_id, update).map(|c| (c, None)))
        }
        Command::DeleteColumn { column_id } => {
            edit_columns(state, |columns| board::delete_column(columns, column_id).map(|c| (c, None)))
        }
        Command::AddCard { column_id, title } => edit_columns(state, |columns| {
            board::add_card(columns, column_id, title.as_deref()).map(|(c, id)| (c, Some(id)))
        }),
        Command::UpdateCard {
            column_id,
            card_id,
            update,
        } => edit_columns(state, |columns| {
            board::update_card(columns, column_id, card_id, update).map(|c| (c, None))
        }),
        Command::ToggleCardTag {
            column_id,
            card_id,
            tag,
        } => edit_columns(state, |columns| {
            board::toggle_card_tag(columns, column_id, card_id, *tag).map(|c| (c, None))
        }),
        Command::DeleteCard { column_id, card_id } => {
            edit_columns(state, |columns| board::delete_card(columns, column_id, card_id).map(|c| (c, None)))
        }
        Command::Drag(event) => edit_columns(state, |columns| board::apply_drag(columns, event).map(|c| (c, None))),
        Command::ImportColumns { columns: imported } => {
            if imported.is_empty() {
                return unchanged("nothing to import");
            }
            edit_columns(state, |columns| Some((append_columns(columns, imported), None)))
        }

        Command::AddWorkflow {
            title,
            color,
            assign_to,
        } => add_workflow(state, title, color.as_deref(), *assign_to),
        Command::UpdateWorkflow { workflow_id, update } => update_workflow(state, workflow_id, update),
        Command::SetColumnWorkflow {
            column_index,
            workflow_id,
        } => edit_columns(state, |columns| {
            board::set_column_workflow(columns, *column_index, workflow_id.as_deref()).map(|c| (c, None))
        }),
        Command::EditWorkflowGroup { group, edit } => {
            edit_columns(state, |columns| board::edit_group(columns, group, *edit).map(|c| (c, None)))
        }

        Command::UpdateUserProfile(update) => {
            if update.is_empty() {
                return unchanged("empty profile update");
            }
            let mut next = state.clone();
            next.user = next.user.with_update(update);
            changed(next)
        }
    }
}

// ===== PROJECTS =====

fn select_project(state: &AppState, project_id: &str) -> ReduceResult {
    if state.project(project_id).is_none() {
        return unchanged(format!("project {} not found", project_id));
    }
    if state.active_project_id.as_deref() == Some(project_id) {
        return unchanged("project already active");
    }
    let mut next = state.clone();
    next.active_project_id = Some(project_id.to_string());
    changed(next)
}

fn create_project(state: &AppState, name: Option<&str>) -> ReduceResult {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Project {}", state.projects.len() + 1));

    let project = default_project(&name);
    let id = project.id.clone();

    let mut next = state.clone();
    next.projects.push(project);
    next.active_project_id = Some(id.clone());
    created(next, id)
}

fn delete_project(state: &AppState, project_id: &str) -> ReduceResult {
    if state.project(project_id).is_none() {
        return unchanged(format!("project {} not found", project_id));
    }
    let mut next = state.clone();
    next.projects.retain(|p| p.id != project_id);
    if state.active_project_id.as_deref() == Some(project_id) {
        next.active_project_id = next.projects.first().map(|p| p.id.clone());
    }
    changed(next)
}

fn rename_project(state: &AppState, project_id: &str, name: &str) -> ReduceResult {
    let name = name.trim();
    if name.is_empty() {
        return unchanged("project name is empty");
    }
    let mut next = state.clone();
    let Some(project) = next.projects.iter_mut().find(|p| p.id == project_id) else {
        return unchanged(format!("project {} not found", project_id));
    };
    project.name = name.to_string();
    changed(next)
}

// ===== PERSONAS =====

const NO_ACTIVE_PROJECT: &str = "no active project";
const NO_ACTIVE_PERSONA: &str = "no active persona";

fn select_persona(state: &AppState, persona_id: &str) -> ReduceResult {
    let mut next = state.clone();
    let Some(project) = next.active_project_mut() else {
        return unchanged(NO_ACTIVE_PROJECT);
    };
    if project.persona(persona_id).is_none() {
        return unchanged(format!("persona {} not found", persona_id));
    }
    if project.active_persona_id.as_deref() == Some(persona_id) {
        return unchanged("persona already active");
    }
    project.active_persona_id = Some(persona_id.to_string());
    changed(next)
}

fn create_persona(state: &AppState, name: Option<&str>) -> ReduceResult {
    let mut next = state.clone();
    let Some(project) = next.active_project_mut() else {
        return unchanged(NO_ACTIVE_PROJECT);
    };
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Persona {}", project.personas.len() + 1));

    let persona = default_persona(&name);
    let id = persona.id.clone();
    project.personas.push(persona);
    project.active_persona_id = Some(id.clone());
    created(next, id)
}

fn delete_persona(state: &AppState, persona_id: &str) -> ReduceResult {
    let mut next = state.clone();
    let Some(project) = next.active_project_mut() else {
        return unchanged(NO_ACTIVE_PROJECT);
    };
    if project.persona(persona_id).is_none() {
        return unchanged(format!("persona {} not found", persona_id));
    }
    project.personas.retain(|p| p.id != persona_id);
    if project.active_persona_id.as_deref() == Some(persona_id) {
        project.active_persona_id = project.personas.first().map(|p| p.id.clone());
    }
    changed(next)
}

fn update_persona(state: &AppState, persona_id: &str, update: &PersonaUpdate) -> ReduceResult {
    let mut next = state.clone();
    let Some(project) = next.active_project_mut() else {
        return unchanged(NO_ACTIVE_PROJECT);
    };
    let Some(persona) = project.personas.iter_mut().find(|p| p.id == persona_id) else {
        return unchanged(format!("persona {} not found", persona_id));
    };

    if let Some(name) = update.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        persona.name = name.to_string();
    }
    if let Some(description) = &update.description {
        persona.description = description.clone();
    }
    if let Some(goals) = &update.goals {
        persona.goals = goals.clone();
    }
    if let Some(pain_points) = &update.pain_points {
        persona.pain_points = pain_points.clone();
    }

    if next == *state {
        return unchanged("persona update changed nothing");
    }
    changed(next)
}

// ===== COLUMNS =====

/// Compute a new column list for the active persona and swap it in.
///
/// This is the single replace primitive every board edit goes through.
fn edit_columns<F>(state: &AppState, f: F) -> ReduceResult
where
    F: FnOnce(&[Column]) -> Option<(Vec<Column>, Option<String>)>,
{
    let Some(persona) = state.active_persona() else {
        return unchanged(NO_ACTIVE_PERSONA);
    };
    let Some((columns, created_id)) = f(&persona.columns) else {
        return unchanged("board edit had no effect");
    };
    if columns == persona.columns {
        return unchanged("board edit had no effect");
    }

    let mut next = state.clone();
    if let Some(persona) = next.active_persona_mut() {
        persona.columns = columns;
    }
    ReduceResult::Changed {
        next_state: next,
        created_id,
    }
}

// ===== WORKFLOWS =====

fn add_workflow(state: &AppState, title: &str, color: Option<&str>, assign_to: Option<usize>) -> ReduceResult {
    let title = title.trim();
    if title.is_empty() {
        return unchanged("workflow title is empty");
    }
    let mut next = state.clone();
    let Some(persona) = next.active_persona_mut() else {
        return unchanged(NO_ACTIVE_PERSONA);
    };

    let workflow = Workflow::new(new_workflow_id(), title.to_string(), color.map(str::to_string));
    let id = workflow.id.clone();
    persona.workflows.push(workflow);

    if let Some(index) = assign_to {
        if let Some(columns) = board::set_column_workflow(&persona.columns, index, Some(id.as_str())) {
            persona.columns = columns;
        }
    }
    created(next, id)
}

fn update_workflow(state: &AppState, workflow_id: &str, update: &WorkflowUpdate) -> ReduceResult {
    let mut next = state.clone();
    let Some(persona) = next.active_persona_mut() else {
        return unchanged(NO_ACTIVE_PERSONA);
    };
    let Some(workflow) = persona.workflows.iter_mut().find(|w| w.id == workflow_id) else {
        return unchanged(format!("workflow {} not found", workflow_id));
    };

    if let Some(title) = update.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        workflow.title = title.to_string();
    }
    if let Some(color) = &update.color {
        workflow.color = color.clone();
    }

    if next == *state {
        return unchanged("workflow update changed nothing");
    }
    changed(next)
}

//! Typed state commands
//!
//! One variant per user action. Persona, column, card and workflow commands
//! act on the active project and its active persona.

use crate::board::{CardUpdate, ColumnUpdate, DragEvent, GroupEdit, WorkflowGroup};
use crate::schemas::{CardTag, Column, ProfileUpdate};

/// Partial update for a persona; `None` leaves a field alone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonaUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub goals: Option<Vec<String>>,
    pub pain_points: Option<Vec<String>>,
}

/// Partial update for a workflow; `Some(None)` clears the color
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowUpdate {
    pub title: Option<String>,
    pub color: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Projects
    SelectProject { project_id: String },
    /// Name defaults to `Project N`
    CreateProject { name: Option<String> },
    DeleteProject { project_id: String },
    RenameProject { project_id: String, name: String },

    // Personas
    SelectPersona { persona_id: String },
    /// Name defaults to `Persona N`
    CreatePersona { name: Option<String> },
    DeletePersona { persona_id: String },
    UpdatePersona { persona_id: String, update: PersonaUpdate },

    // Columns and cards
    ReplaceColumns { columns: Vec<Column> },
    AddColumn { title: Option<String> },
    UpdateColumn { column_id: String, update: ColumnUpdate },
    DeleteColumn { column_id: String },
    AddCard { column_id: String, title: Option<String> },
    UpdateCard { column_id: String, card_id: String, update: CardUpdate },
    ToggleCardTag { column_id: String, card_id: String, tag: CardTag },
    DeleteCard { column_id: String, card_id: String },
    Drag(DragEvent),
    ImportColumns { columns: Vec<Column> },

    // Workflows
    /// Optionally tags the column at `assign_to` with the new workflow
    AddWorkflow { title: String, color: Option<String>, assign_to: Option<usize> },
    UpdateWorkflow { workflow_id: String, update: WorkflowUpdate },
    SetColumnWorkflow { column_index: usize, workflow_id: Option<String> },
    EditWorkflowGroup { group: WorkflowGroup, edit: GroupEdit },

    // Profile
    UpdateUserProfile(ProfileUpdate),
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectProject { .. } => "select_project",
            Command::CreateProject { .. } => "create_project",
            Command::DeleteProject { .. } => "delete_project",
            Command::RenameProject { .. } => "rename_project",
            Command::SelectPersona { .. } => "select_persona",
            Command::CreatePersona { .. } => "create_persona",
            Command::DeletePersona { .. } => "delete_persona",
            Command::UpdatePersona { .. } => "update_persona",
            Command::ReplaceColumns { .. } => "replace_columns",
            Command::AddColumn { .. } => "add_column",
            Command::UpdateColumn { .. } => "update_column",
            Command::DeleteColumn { .. } => "delete_column",
            Command::AddCard { .. } => "add_card",
            Command::UpdateCard { .. } => "update_card",
            Command::ToggleCardTag { .. } => "toggle_card_tag",
            Command::DeleteCard { .. } => "delete_card",
            Command::Drag(_) => "drag",
            Command::ImportColumns { .. } => "import_columns",
            Command::AddWorkflow { .. } => "add_workflow",
            Command::UpdateWorkflow { .. } => "update_workflow",
            Command::SetColumnWorkflow { .. } => "set_column_workflow",
            Command::EditWorkflowGroup { .. } => "edit_workflow_group",
            Command::UpdateUserProfile(_) => "update_user_profile",
        }
    }
}

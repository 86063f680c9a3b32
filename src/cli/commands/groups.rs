//! Groups command - Print workflow bands over the board

use std::path::Path;

use serde::Serialize;

use crate::board::{workflow_groups, GroupEdit, WorkflowGroup};
use crate::errors::Result;
use crate::schemas::{Persona, DEFAULT_WORKFLOW_COLOR};

use super::context::{to_json, Workspace};

/// One band as reported to the user
#[derive(Debug, Serialize)]
pub struct GroupView {
    pub workflow_id: Option<String>,
    pub title: Option<String>,
    pub color: String,
    pub start: usize,
    pub end: usize,
    pub columns: Vec<String>,
    pub edits: Vec<GroupEdit>,
}

pub fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, false)?;
    let views = group_views(workspace.active_persona()?);

    if json {
        println!("{}", to_json(&views)?);
        return Ok(());
    }

    for view in &views {
        let label = match &view.title {
            Some(title) => format!("{} ({})", title, view.color),
            None => "(no workflow)".to_string(),
        };
        let edits: Vec<String> = view.edits.iter().map(|e| edit_label(*e).to_string()).collect();
        println!(
            "columns {}-{}  {}  [{}]",
            view.start,
            view.end.saturating_sub(1),
            label,
            edits.join(", ")
        );
        for title in &view.columns {
            println!("    {}", title);
        }
    }
    Ok(())
}

/// Describe each group of the persona's board with its allowed edits
pub fn group_views(persona: &Persona) -> Vec<GroupView> {
    let total = persona.columns.len();
    workflow_groups(&persona.columns)
        .iter()
        .map(|group| view(persona, group, total))
        .collect()
}

fn view(persona: &Persona, group: &WorkflowGroup, total: usize) -> GroupView {
    let workflow = group.workflow_id.as_deref().and_then(|id| persona.workflow(id));
    let edits = if group.is_assigned() {
        [
            GroupEdit::ExtendLeft,
            GroupEdit::ExtendRight,
            GroupEdit::RetractLeft,
            GroupEdit::RetractRight,
        ]
        .into_iter()
        .filter(|edit| group.allows(*edit, total))
        .collect()
    } else {
        Vec::new()
    };

    GroupView {
        workflow_id: group.workflow_id.clone(),
        title: workflow.map(|w| w.title.clone()),
        color: workflow
            .map(|w| w.display_color().to_string())
            .unwrap_or_else(|| DEFAULT_WORKFLOW_COLOR.to_string()),
        start: group.start,
        end: group.end,
        columns: persona
            .columns
            .iter()
            .enumerate()
            .filter(|(index, _)| group.contains(*index))
            .map(|(_, c)| c.title.clone())
            .collect(),
        edits,
    }
}

fn edit_label(edit: GroupEdit) -> &'static str {
    match edit {
        GroupEdit::ExtendLeft => "extend left",
        GroupEdit::ExtendRight => "extend right",
        GroupEdit::RetractLeft => "retract left",
        GroupEdit::RetractRight => "retract right",
    }
}

//! Show command - Print the active persona's board

use std::path::Path;

use crate::errors::Result;
use crate::schemas::{Column, Persona, TagCategory, TagFilter};

use super::context::{to_json, Workspace};

/// Show the active persona's columns, restricted to `tag`
pub fn run(cwd: Option<&Path>, tag: TagFilter, json: bool) -> Result<()> {
    let workspace = Workspace::open(cwd, false)?;
    let project = workspace.active_project()?;
    let persona = workspace.active_persona()?;
    let columns = workspace.store.filtered_columns(tag);

    if json {
        println!("{}", to_json(&columns)?);
        return Ok(());
    }

    println!("{} / {}", project.name, persona.name);
    if tag != TagFilter::All {
        println!("Filter: {}", tag);
    }
    println!();
    print!("{}", render_board(persona, &columns));
    Ok(())
}

/// Plain-text rendering of `columns`, with workflow titles from `persona`
pub fn render_board(persona: &Persona, columns: &[Column]) -> String {
    let mut out = String::new();
    for (index, column) in columns.iter().enumerate() {
        let workflow = column
            .workflow_id
            .as_deref()
            .and_then(|id| persona.workflow(id))
            .map(|w| format!(" [{}]", w.title))
            .unwrap_or_default();
        out.push_str(&format!("{}. {}{}  ({})\n", index + 1, column.title, workflow, column.id));

        for card in &column.cards {
            let mut tags = card.tags.clone();
            tags.sort_by_key(|t| t.category() == TagCategory::Release);
            let tags: Vec<&str> = tags.iter().map(|t| t.label()).collect();
            out.push_str(&format!("   - {}", card.title));
            if !tags.is_empty() {
                out.push_str(&format!("  <{}>", tags.join(", ")));
            }
            out.push('\n');
            if let Some(description) = &card.description {
                out.push_str(&format!("     {}\n", description));
            }
        }
    }
    out
}

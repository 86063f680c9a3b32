//! Persona schema - a user archetype owning its own journey board

use serde::{Deserialize, Serialize};

use super::{Column, Workflow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub goals: Vec<String>,

    #[serde(default)]
    pub pain_points: Vec<String>,

    /// Journey steps, left to right
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Saved states written before workflows existed have no such key
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

impl Persona {
    pub fn new(id: String, name: String) -> Self {
        Persona {
            id,
            name,
            description: String::new(),
            goals: Vec::new(),
            pain_points: Vec::new(),
            columns: Vec::new(),
            workflows: Vec::new(),
        }
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn workflow(&self, workflow_id: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == workflow_id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_workflows(mut self, workflows: Vec<Workflow>) -> Self {
        self.workflows = workflows;
        self
    }
}

//! State store
//!
//! Owns the single current snapshot and writes every change through to a
//! storage backend.

use tracing::debug;

use crate::board::filter_columns;
use crate::errors::Result;
use crate::schemas::{AppState, Column, TagFilter};
use crate::storage::{load_state, save_state, StateStorage};

use super::commands::Command;
use super::reducer::{reduce, ReduceResult};

/// What a dispatched command did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State replaced and written through
    Changed { created_id: Option<String> },
    /// State untouched, nothing written
    Unchanged { reason: String },
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed { .. })
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            Outcome::Changed { created_id } => created_id.as_deref(),
            Outcome::Unchanged { .. } => None,
        }
    }
}

pub struct Store {
    state: AppState,
    storage: Box<dyn StateStorage>,
    pretty: bool,
}

impl Store {
    /// Load the stored state (merged over `defaults`) and wrap it.
    pub fn open(storage: Box<dyn StateStorage>, defaults: AppState, pretty: bool) -> Self {
        let state = load_state(storage.as_ref(), defaults);
        Store {
            state,
            storage,
            pretty,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Active persona's columns restricted to `filter`; empty without an active persona.
    pub fn filtered_columns(&self, filter: TagFilter) -> Vec<Column> {
        self.state
            .active_persona()
            .map(|persona| filter_columns(&persona.columns, filter))
            .unwrap_or_default()
    }

    /// Reduce `command` against the current state and persist any change.
    ///
    /// # Errors
    /// Returns the storage error when the write-through fails. The in-memory
    /// state has already advanced at that point.
    pub fn dispatch(&mut self, command: &Command) -> Result<Outcome> {
        match reduce(&self.state, command) {
            ReduceResult::Changed {
                next_state,
                created_id,
            } => {
                debug!(command = command.name(), created = ?created_id, "State changed");
                self.state = next_state;
                self.save()?;
                Ok(Outcome::Changed { created_id })
            }
            ReduceResult::Unchanged { reason } => {
                debug!(command = command.name(), %reason, "State unchanged");
                Ok(Outcome::Unchanged { reason })
            }
        }
    }

    /// Write the current state through, changed or not.
    pub fn save(&mut self) -> Result<()> {
        save_state(self.storage.as_mut(), &self.state, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_state, sample_state};
    use crate::schemas::CardTag;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn test_dispatch_persists_on_change() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::for_root(temp.path(), "upstack-story-app");
        let mut store = Store::open(Box::new(storage), sample_state(), false);

        let outcome = store
            .dispatch(&Command::RenameProject {
                project_id: "project-1".to_string(),
                name: "Claims".to_string(),
            })
            .unwrap();
        assert!(outcome.is_changed());

        let reopened = Store::open(
            Box::new(FileStorage::for_root(temp.path(), "upstack-story-app")),
            default_state(false),
            false,
        );
        assert_eq!(reopened.state().projects[0].name, "Claims");
    }

    #[test]
    fn test_unchanged_command_does_not_write() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::for_root(temp.path(), "upstack-story-app");
        let path = storage.path().to_path_buf();
        let mut store = Store::open(Box::new(storage), sample_state(), false);

        let outcome = store
            .dispatch(&Command::SelectProject {
                project_id: "missing".to_string(),
            })
            .unwrap();
        assert!(!outcome.is_changed());
        assert!(!path.exists());
    }

    #[test]
    fn test_created_id_is_reported() {
        let mut store = Store::open(Box::new(MemoryStorage::new()), sample_state(), true);
        let outcome = store.dispatch(&Command::CreatePersona { name: None }).unwrap();

        let id = outcome.created_id().unwrap();
        let project = store.state().active_project().unwrap();
        assert_eq!(project.active_persona_id.as_deref(), Some(id));
    }

    #[test]
    fn test_filtered_columns_keeps_every_column() {
        let store = Store::open(Box::new(MemoryStorage::new()), sample_state(), false);
        let all = store.filtered_columns(TagFilter::All);
        let admin = store.filtered_columns(TagFilter::Tag(CardTag::Admin));

        assert_eq!(all.len(), admin.len());
        assert!(admin
            .iter()
            .flat_map(|c| &c.cards)
            .all(|card| card.has_tag(CardTag::Admin)));
    }

    #[test]
    fn test_filtered_columns_without_persona() {
        let mut store = Store::open(Box::new(MemoryStorage::new()), sample_state(), false);
        store
            .dispatch(&Command::DeleteProject {
                project_id: "project-1".to_string(),
            })
            .unwrap();
        assert!(store.filtered_columns(TagFilter::All).is_empty());
    }
}

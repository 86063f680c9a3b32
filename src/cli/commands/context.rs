//! Shared plumbing for commands that read or change the stored state

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::load_config;
use crate::domain::{default_state, Command, Outcome, Store};
use crate::errors::{JourneyError, Result};
use crate::fs::{find_data_root, resolve_cwd};
use crate::schemas::{Config, Persona, Project};
use crate::storage::{FileStorage, MemoryStorage, StateStorage};

/// Data root, its config and an open store
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub store: Store,
}

impl Workspace {
    /// Locate the data root above `cwd` and open its state.
    ///
    /// With `dry_run` the stored blob is copied into memory so changes are
    /// never written back.
    pub fn open(cwd: Option<&Path>, dry_run: bool) -> Result<Self> {
        let start = resolve_cwd(cwd);
        let root = find_data_root(&start)?;
        let config = load_config(&root)?;
        let file = FileStorage::for_root(&root, &config.storage_key);
        debug!(path = %file.path().display(), dry_run, "Opening state");

        let storage: Box<dyn StateStorage> = if dry_run {
            match file.load_blob()? {
                Some(blob) => Box::new(MemoryStorage::with_blob(blob)),
                None => Box::new(MemoryStorage::new()),
            }
        } else {
            Box::new(file)
        };

        let store = Store::open(storage, default_state(config.seed_sample_data), config.pretty_json);
        Ok(Workspace { root, config, store })
    }

    /// Dispatch a command and print what happened.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let outcome = self.store.dispatch(&command)?;
        match &outcome {
            Outcome::Changed { .. } => info!(command = command.name(), "Updated"),
            Outcome::Unchanged { reason } => println!("Nothing changed: {}", reason),
        }
        Ok(outcome)
    }

    pub fn active_project(&self) -> Result<&Project> {
        self.store.state().active_project().ok_or_else(|| {
            JourneyError::NotFound("No active project; create one with `journeymap project create`".to_string())
        })
    }

    pub fn active_persona(&self) -> Result<&Persona> {
        self.active_project()?.active_persona().ok_or_else(|| {
            JourneyError::NotFound("No active persona; create one with `journeymap persona create`".to_string())
        })
    }
}

/// Resolve a column given as an id or a 1-based position to its 0-based index.
pub fn column_index(persona: &Persona, key: &str) -> Result<usize> {
    if let Some(index) = persona.columns.iter().position(|c| c.id == key) {
        return Ok(index);
    }
    match key.parse::<usize>() {
        Ok(position) if position >= 1 && position <= persona.columns.len() => Ok(position - 1),
        _ => Err(JourneyError::NotFound(format!("Column {} not found", key))),
    }
}

/// Resolve a column key to its id.
pub fn column_id(persona: &Persona, key: &str) -> Result<String> {
    let index = column_index(persona, key)?;
    Ok(persona.columns[index].id.clone())
}

/// Resolve a card given as an id or a 1-based position within its column.
pub fn card_index(persona: &Persona, column: usize, key: &str) -> Result<usize> {
    let cards = &persona.columns[column].cards;
    if let Some(index) = cards.iter().position(|c| c.id == key) {
        return Ok(index);
    }
    match key.parse::<usize>() {
        Ok(position) if position >= 1 && position <= cards.len() => Ok(position - 1),
        _ => Err(JourneyError::NotFound(format!(
            "Card {} not found in column {}",
            key, persona.columns[column].title
        ))),
    }
}

/// Convert a 1-based position argument to a 0-based index below `len`.
pub fn position_index(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        return Err(JourneyError::InvalidArgument(format!(
            "Position {} is out of range 1..={}",
            position, len
        )));
    }
    Ok(position - 1)
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| JourneyError::InvalidJson(e.to_string()))
}

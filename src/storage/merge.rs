//! Load and save the state blob
//!
//! Loading is lenient: the stored object is laid over the default state key by
//! key, so blobs written before a top-level field existed still load. Anything
//! that cannot be read or decoded falls back to the defaults.

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{JourneyError, Result};
use crate::schemas::AppState;

use super::StateStorage;

/// Top-level keys whose `null` is a real value rather than a gap
const NULLABLE_KEYS: [&str; 1] = ["activeProjectId"];

/// Decode `blob` by overlaying its top-level keys onto `defaults`.
///
/// A `null` value keeps the default unless the key is nullable.
///
/// # Errors
/// * `InvalidJson` - If the blob is not JSON, is not an object, or the merged
///   value does not decode
pub fn merge_over_defaults(blob: &str, defaults: &AppState) -> Result<AppState> {
    let parsed: Value = serde_json::from_str(blob)
        .map_err(|e| JourneyError::InvalidJson(format!("Stored state is not JSON: {}", e)))?;

    let Value::Object(stored) = parsed else {
        return Err(JourneyError::InvalidJson(
            "Stored state is not a JSON object".to_string(),
        ));
    };

    let mut merged = serde_json::to_value(defaults)
        .map_err(|e| JourneyError::InvalidJson(e.to_string()))?;

    if let Value::Object(base) = &mut merged {
        for (key, value) in stored {
            if value.is_null() && !NULLABLE_KEYS.contains(&key.as_str()) {
                continue;
            }
            base.insert(key, value);
        }
    }

    serde_json::from_value(merged)
        .map_err(|e| JourneyError::InvalidJson(format!("Stored state has the wrong shape: {}", e)))
}

/// Load the state from `storage`, falling back to `defaults`.
///
/// Never fails: read and decode problems are logged and the defaults returned.
pub fn load_state(storage: &dyn StateStorage, defaults: AppState) -> AppState {
    let blob = match storage.load_blob() {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("No stored state, starting from defaults");
            return defaults;
        }
        Err(e) => {
            warn!(error = %e, "Could not read stored state, using defaults");
            return defaults;
        }
    };

    match merge_over_defaults(&blob, &defaults) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Discarding stored state, using defaults");
            defaults
        }
    }
}

/// Serialize the whole state.
pub fn serialize_state(state: &AppState, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    };
    result.map_err(|e| JourneyError::InvalidJson(e.to_string()))
}

/// Write the whole state through to `storage`.
pub fn save_state(storage: &mut dyn StateStorage, state: &AppState, pretty: bool) -> Result<()> {
    let blob = serialize_state(state, pretty)?;
    storage.save_blob(&blob)?;
    debug!(bytes = blob.len(), "Wrote state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_state, sample_state};
    use crate::schemas::UserProfile;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    #[test]
    fn test_no_blob_returns_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_state(&storage, sample_state()), sample_state());
    }

    #[test]
    fn test_corrupt_blob_returns_defaults() {
        let storage = MemoryStorage::with_blob("{not json");
        assert_eq!(load_state(&storage, sample_state()), sample_state());
    }

    #[test]
    fn test_non_object_blob_returns_defaults() {
        for blob in ["[]", "42", "\"text\"", "null"] {
            let storage = MemoryStorage::with_blob(blob);
            assert_eq!(load_state(&storage, sample_state()), sample_state(), "blob {}", blob);
        }
    }

    #[test]
    fn test_wrong_shape_returns_defaults() {
        let storage = MemoryStorage::with_blob(r#"{"projects": "nope"}"#);
        assert_eq!(load_state(&storage, sample_state()), sample_state());
    }

    #[test]
    fn test_missing_user_gets_default_profile() {
        let storage = MemoryStorage::with_blob(r#"{"projects": [], "activeProjectId": null}"#);
        let state = load_state(&storage, sample_state());

        assert!(state.projects.is_empty());
        assert!(state.active_project_id.is_none());
        assert_eq!(state.user, UserProfile::default());
    }

    #[test]
    fn test_null_user_gets_default_profile() {
        let storage = MemoryStorage::with_blob(r#"{"user": null}"#);
        let state = load_state(&storage, sample_state());
        assert_eq!(state.user.name, "Guest");
        assert_eq!(state.projects, sample_state().projects);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let storage = MemoryStorage::with_blob(r#"{"theme": "dark"}"#);
        assert_eq!(load_state(&storage, sample_state()), sample_state());
    }

    #[test]
    fn test_older_blob_backfills_nested_defaults() {
        // Written before workflows, tags and goals existed
        let blob = r#"{
            "projects": [{
                "id": "p", "name": "Old", "activePersonaId": "x",
                "personas": [{
                    "id": "x", "name": "Legacy", "description": "",
                    "columns": [{"id": "c", "title": "Step", "cards": [{"id": "k", "title": "Card"}]}]
                }]
            }],
            "activeProjectId": "p"
        }"#;
        let state = load_state(&MemoryStorage::with_blob(blob), default_state(false));

        let persona = state.active_persona().unwrap();
        assert!(persona.workflows.is_empty());
        assert!(persona.goals.is_empty());
        assert!(persona.columns[0].cards[0].tags.is_empty());
        assert!(persona.columns[0].workflow_id.is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut storage = MemoryStorage::new();
        let state = sample_state();

        save_state(&mut storage, &state, false).unwrap();
        assert_eq!(storage.writes(), 1);
        assert_eq!(load_state(&storage, default_state(false)), state);
    }

    #[test]
    fn test_serialized_field_names() {
        let blob = serialize_state(&sample_state(), false).unwrap();
        assert!(blob.contains("\"activeProjectId\""));
        assert!(blob.contains("\"activePersonaId\""));
        assert!(blob.contains("\"painPoints\""));
        assert!(blob.contains("\"workflowId\""));
    }

    #[test]
    fn test_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::for_root(temp.path(), "upstack-story-app");
        let state = default_state(false);

        save_state(&mut storage, &state, true).unwrap();
        let reopened = FileStorage::for_root(temp.path(), "upstack-story-app");
        assert_eq!(load_state(&reopened, sample_state()), state);
    }
}

//! Random identifiers for newly created entities

use uuid::Uuid;

/// Generate a fresh identifier for a project, persona, column or card.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generate a fresh workflow identifier (`wf-` prefixed).
pub fn new_workflow_id() -> String {
    format!("wf-{}", new_id())
}

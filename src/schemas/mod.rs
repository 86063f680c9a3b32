//! Schema types for journeymap
//!
//! Field names serialize in camelCase so a state blob saved by the browser
//! editor loads unchanged.

mod board;
mod config;
mod ids;
mod persona;
mod profile;
mod project;
mod state;
mod tag;

pub use board::{
    Card, Column, Workflow, DEFAULT_WORKFLOW_COLOR, NEW_WORKFLOW_COLOR, WORKFLOW_PALETTE,
};
pub use config::{Config, DEFAULT_STORAGE_KEY};
pub use ids::{new_id, new_workflow_id};
pub use persona::Persona;
pub use profile::{BillingInfo, ProfileUpdate, UserProfile};
pub use project::Project;
pub use state::AppState;
pub use tag::{CardTag, TagCategory, TagFilter};

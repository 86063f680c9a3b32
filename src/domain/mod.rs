//! Application state commands, reducer and store

mod commands;
mod defaults;
mod reducer;
mod store;


pub use commands::{Command, PersonaUpdate, WorkflowUpdate};
pub use defaults::{default_persona, default_project, default_state, sample_state};
pub use reducer::{reduce, ReduceResult};
pub use store::{Outcome, Store};

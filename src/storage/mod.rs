//! Persistence of the application state
//!
//! A storage backend holds one opaque JSON blob. Loading merges the blob over
//! the default state; saving writes the whole state every time.

mod backend;
mod merge;

pub use backend::{FileStorage, MemoryStorage, StateStorage};
pub use merge::{load_state, merge_over_defaults, save_state, serialize_state};

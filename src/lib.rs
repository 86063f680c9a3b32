//! Journeymap - user journey mapping as a persisted state model
//!
//! This library provides the core functionality for the journeymap CLI, including:
//! - Schema definitions for projects, personas, columns, cards and workflows
//! - Board logic for drag reordering, workflow bands, edits and tag filtering
//! - A pure reducer over typed commands and a write-through store
//! - Persistence of the whole state as one JSON blob
//! - Spreadsheet (CSV) import into columns

pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod import;
pub mod schemas;
pub mod storage;

// Re-export commonly used types
pub use domain::{reduce, Command, ReduceResult, Store};
pub use errors::{JourneyError, Result};
pub use schemas::{AppState, Card, CardTag, Column, Config, Persona, Project, Workflow};

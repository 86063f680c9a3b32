//! CLI command implementations

pub mod card;
pub mod column;
pub mod context;
pub mod groups;
pub mod import;
pub mod init;
pub mod persona;
pub mod profile;
pub mod project;
pub mod show;
pub mod workflow;

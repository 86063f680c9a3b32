//! CLI module for journeymap
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::schemas::{CardTag, TagFilter};

/// Journeymap - Map user journeys as boards of steps, actions and workflows
#[derive(Parser, Debug)]
#[command(name = "journeymap")]
#[command(version)]
#[command(about = "Map user journeys as boards of steps, actions and workflows")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Apply commands in memory without writing the state file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .journeymap directory with config and initial state
    Init {
        /// Reset existing state to the defaults
        #[arg(long)]
        force: bool,

        /// Start from a single empty project instead of the sample
        #[arg(long)]
        empty: bool,
    },

    /// Show the active persona's board
    Show {
        /// Only show cards with this tag (user, system, admin, edge, mvp, v1, v2, out-of-scope, all)
        #[arg(long, default_value = "all")]
        tag: TagFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show workflow bands and the edits they allow
    Groups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectCommand,
    },

    /// Manage personas of the active project
    Persona {
        #[command(subcommand)]
        action: PersonaCommand,
    },

    /// Edit journey steps of the active persona
    Column {
        #[command(subcommand)]
        action: ColumnCommand,
    },

    /// Edit cards of the active persona
    Card {
        #[command(subcommand)]
        action: CardCommand,
    },

    /// Manage workflows of the active persona
    Workflow {
        #[command(subcommand)]
        action: WorkflowCommand,
    },

    /// Append columns read from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,

        /// Row holding column titles (1-based)
        #[arg(long, default_value_t = 1)]
        header_row: usize,
    },

    /// Show or update the user profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        plan: Option<String>,

        /// Billing card holder
        #[arg(long)]
        card_holder: Option<String>,

        /// Billing card number
        #[arg(long)]
        card_number: Option<String>,

        /// Billing card expiry
        #[arg(long)]
        expiry: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List projects
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a project and make it active
    Create { name: Option<String> },
    /// Make a project active
    Select { id: String },
    /// Rename a project
    Rename { id: String, name: String },
    /// Delete a project
    Delete {
        id: String,

        /// Allow deleting the last project
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PersonaCommand {
    /// List personas of the active project
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a persona and make it active
    Create { name: Option<String> },
    /// Make a persona active
    Select { id: String },
    /// Edit persona details
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replace the goals (repeatable)
        #[arg(long = "goal")]
        goals: Vec<String>,

        /// Replace the pain points (repeatable)
        #[arg(long = "pain-point")]
        pain_points: Vec<String>,
    },
    /// Delete a persona
    Delete {
        id: String,

        /// Allow deleting the last persona
        #[arg(long)]
        force: bool,
    },
}

/// Columns are addressed by id or by 1-based position.
#[derive(Subcommand, Debug)]
pub enum ColumnCommand {
    /// Append a column
    Add { title: Option<String> },
    /// Rename a column
    Rename { column: String, title: String },
    /// Delete a column and its cards
    Delete { column: String },
    /// Move a column to a 1-based position
    Move { column: String, to: usize },
}

#[derive(Subcommand, Debug)]
pub enum CardCommand {
    /// Append a card to a column
    Add { column: String, title: Option<String> },
    /// Edit a card's title or description
    Edit {
        column: String,
        card: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,

        #[arg(long)]
        clear_description: bool,
    },
    /// Toggle a tag on a card
    Tag {
        column: String,
        card: String,
        tag: CardTag,
    },
    /// Delete a card
    Delete { column: String, card: String },
    /// Move a card to another column or position
    Move {
        column: String,
        card: String,

        /// Destination column (defaults to the source column)
        #[arg(long)]
        to_column: Option<String>,

        /// 1-based destination position (defaults to the end)
        #[arg(long)]
        position: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkflowCommand {
    /// Create a workflow, optionally assigning it to a column
    Add {
        title: String,

        #[arg(long)]
        color: Option<String>,

        /// Column to assign the new workflow to
        #[arg(long)]
        column: Option<String>,
    },
    /// Edit a workflow
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,

        #[arg(long)]
        clear_color: bool,
    },
    /// Assign a workflow to a column, or clear it when no workflow is given
    Assign {
        column: String,
        workflow: Option<String>,
    },
    /// Grow the band containing a column by one step
    Extend { column: String, side: Side },
    /// Shrink the band containing a column by one step
    Retract { column: String, side: Side },
}

/// Edge of a workflow band
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Left,
    Right,
}

//! Import command - Append columns from a CSV file

use std::path::Path;

use crate::domain::Command;
use crate::errors::{JourneyError, Result};
use crate::fs::read_text;
use crate::import::import_csv;

use super::context::Workspace;

/// Import `file` into the active persona, using the 1-based `header_row` for titles
pub fn run(cwd: Option<&Path>, dry_run: bool, file: &Path, header_row: usize) -> Result<()> {
    if header_row == 0 {
        return Err(JourneyError::InvalidArgument(
            "--header-row is 1-based".to_string(),
        ));
    }

    let mut workspace = Workspace::open(cwd, dry_run)?;
    workspace.active_persona()?;

    let text = read_text(file)?;
    let columns = import_csv(&text, header_row - 1)?;
    let count = columns.len();

    let outcome = workspace.apply(Command::ImportColumns { columns })?;
    if outcome.is_changed() {
        println!("Imported {} columns from {}", count, file.display());
    }
    Ok(())
}

//! Init command - Create the .journeymap directory

use std::path::Path;

use tracing::info;

use crate::config::save_config;
use crate::domain::default_state;
use crate::errors::{JourneyError, Result};
use crate::fs::{get_data_dir, resolve_cwd};
use crate::schemas::Config;
use crate::storage::{save_state, FileStorage};

/// Initialize journeymap in the specified directory
pub fn run(cwd: Option<&Path>, force: bool, empty: bool, dry_run: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let data_dir = get_data_dir(&root);

    if data_dir.exists() && !force {
        return Err(JourneyError::InvalidArgument(format!(
            "{} already exists; use --force to reset it",
            data_dir.display()
        )));
    }

    let config = Config {
        seed_sample_data: !empty,
        ..Config::default()
    };
    let state = default_state(config.seed_sample_data);

    if dry_run {
        println!(
            "Would create {} with {} project(s)",
            data_dir.display(),
            state.projects.len()
        );
        return Ok(());
    }

    std::fs::create_dir_all(&data_dir)?;
    save_config(&root, &config)?;
    let mut storage = FileStorage::for_root(&root, &config.storage_key);
    save_state(&mut storage, &state, config.pretty_json)?;

    info!(path = %data_dir.display(), "Initialized journeymap");
    println!("Initialized {}", data_dir.display());
    Ok(())
}

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{DATA_DIR_NAME, STORAGE_FILE};
use crate::db::LocalStorage;

pub fn run(path: &Path) -> Result<()> {
    let data_dir = path.join(DATA_DIR_NAME);

    if data_dir.is_dir() {
        println!("Already initialized at {}", data_dir.display());
        return Ok(());
    }

    fs::create_dir_all(&data_dir).context("Failed to create .helpdesk directory")?;
    LocalStorage::open(&data_dir.join(STORAGE_FILE))?;

    println!("Initialized helpdesk in {}", data_dir.display());
    println!("Log in with 'helpdesk login admin@example.com'.");
    Ok(())
}

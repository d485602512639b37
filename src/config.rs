use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::Latency;

pub const DATA_DIR_NAME: &str = ".helpdesk";
pub const STORAGE_FILE: &str = "storage.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub latency: Latency,
}

impl Config {
    /// Builds the runtime configuration from CLI/env values.
    ///
    /// `data_dir` wins when given. Otherwise the nearest `.helpdesk`
    /// directory above `cwd` is used, then the platform data directory.
    pub fn resolve(cwd: &Path, data_dir: Option<&Path>, latency_ms: Option<u64>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => match find_data_dir(cwd) {
                Some(dir) => dir,
                None => default_data_dir()?,
            },
        };

        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        let latency = match latency_ms {
            Some(ms) => Latency::uniform(Duration::from_millis(ms)),
            None => Latency::default(),
        };

        Ok(Config { data_dir, latency })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

pub fn find_data_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn default_data_dir() -> Result<PathBuf> {
    match dirs::data_local_dir() {
        Some(dir) => Ok(dir.join("helpdesk")),
        None => bail!(
            "Could not determine a data directory. Run 'helpdesk init' or pass --data-dir."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_data_dir_in_parent() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DATA_DIR_NAME)).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_data_dir(&nested).unwrap();
        assert_eq!(found, dir.path().join(DATA_DIR_NAME));
    }

    #[test]
    fn test_explicit_data_dir_is_created() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("custom");

        let config = Config::resolve(dir.path(), Some(&target), Some(0)).unwrap();
        assert!(target.is_dir());
        assert_eq!(config.storage_path(), target.join(STORAGE_FILE));
        assert_eq!(config.latency, Latency::none());
    }

    #[test]
    fn test_default_latency() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("custom");

        let config = Config::resolve(dir.path(), Some(&target), None).unwrap();
        assert_eq!(config.latency.login, Duration::from_millis(1000));
        assert_eq!(config.latency.fetch, Duration::from_millis(500));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Resolve the CLI state directory based on priority:
/// 1. MY_LOGGER_PATH environment variable
/// 2. System data directory, subpath `my_logger`
/// 3. ~/.local/share/my_logger (fallback for systems without one)
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("MY_LOGGER_PATH") {
        return Ok(PathBuf::from(env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("my_logger"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".local/share/my_logger"));
    }

    bail!("Could not determine a data directory: no HOME or system data directory found")
}

pub fn default_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("logs.db")
}

/// Resolve the store location, persisting any explicit override.
///
/// The chosen path lives in a small `db_path.txt` state file under the data
/// directory so it carries across invocations; the first-ever run seeds it
/// with the platform default.
pub fn resolve_db_path(data_dir: &Path, override_path: Option<&str>) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let state_file = data_dir.join("db_path.txt");
    if let Some(path) = override_path {
        fs::write(&state_file, path)?;
    } else if !state_file.exists() {
        fs::write(&state_file, default_db_path(data_dir).display().to_string())?;
    }

    let stored = fs::read_to_string(&state_file)?;
    Ok(PathBuf::from(stored.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_run_seeds_the_default_path() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_db_path(dir.path(), None).unwrap();
        assert_eq!(resolved, dir.path().join("logs.db"));
        assert!(dir.path().join("db_path.txt").exists());
    }

    #[test]
    fn override_persists_across_invocations() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("elsewhere.db");

        let first = resolve_db_path(dir.path(), Some(custom.to_str().unwrap())).unwrap();
        assert_eq!(first, custom);

        // A later run without the flag still sees the override.
        let second = resolve_db_path(dir.path(), None).unwrap();
        assert_eq!(second, custom);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// File-per-incident writer: one uniquely named `.log` file per capture.
#[derive(Debug, Clone)]
pub struct FolderSink {
    folder: PathBuf,
}

impl FolderSink {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Write one incident file. The folder is created on demand and the
    /// filename is a collision-resistant generated token.
    pub fn write(&self, message: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.folder)?;
        let path = self.folder.join(format!("{}.log", Uuid::new_v4()));
        fs::write(&path, format!("{}\n", message))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_folder_and_unique_files() {
        let dir = TempDir::new().unwrap();
        let sink = FolderSink::new(dir.path().join("logs"));

        let first = sink.write("boom").unwrap();
        let second = sink.write("boom again").unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap(), "boom\n");
        assert_eq!(first.extension().unwrap(), "log");
    }
}

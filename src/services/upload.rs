//! On-disk storage for uploaded log files.

use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Writes uploads into a single directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `contents` and return the path written.
    ///
    /// Every call writes a fresh file: the name is prefixed with a UUID and
    /// only the final component of `filename` is kept, so uploads never
    /// overwrite each other or land outside the upload directory.
    pub async fn save(&self, filename: Option<&str>, contents: &[u8]) -> io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(stored_name(filename));
        tokio::fs::write(&path, contents).await?;

        info!(path = %path.display(), bytes = contents.len(), "Stored uploaded file");
        Ok(path)
    }

    pub async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

fn stored_name(filename: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match filename
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
    {
        Some(name) => format!("upload-{id}-{name}"),
        None => format!("upload-{id}.json"),
    }
}

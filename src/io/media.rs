use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::error::IoError;
use crate::domain::MediaRecord;

/// File extensions accepted as images, compared case-insensitively
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Paths of every image directly inside `dir`, ordered by filename.
///
/// Only directory metadata is read; subdirectories and non-image files are
/// ignored.
pub async fn list_media_dir(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, IoError> {
    let dir = dir.as_ref();
    if !fs::metadata(dir).await?.is_dir() {
        return Err(IoError::NotADirectory(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() || !is_image(&path) {
            debug!(path = %path.display(), "Skipping non-image entry");
            continue;
        }
        paths.push(path);
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Load every image directly inside `dir`, ordered by filename
pub async fn load_media_dir(dir: impl AsRef<Path>) -> Result<Vec<MediaRecord>, IoError> {
    let mut records = Vec::new();
    for path in list_media_dir(dir).await? {
        let payload = fs::read(&path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        records.push(MediaRecord::new(filename, payload));
    }
    Ok(records)
}

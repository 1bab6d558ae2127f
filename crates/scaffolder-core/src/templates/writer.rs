//! File writes into the generated project

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write `contents` to `path`, replacing whatever was there
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Create `dir` and any missing parents
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vite.config.ts");

        write_file(&path, "first").await.unwrap();
        write_file(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("lib").join("query.ts");

        write_file(&path, "export {}").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("src/lib");

        ensure_dir(&lib).await.unwrap();
        ensure_dir(&lib).await.unwrap();

        assert!(lib.is_dir());
    }
}

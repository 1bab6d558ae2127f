//! Overwrite confirmation for an existing target directory

use super::ProjectTarget;
use crate::error::ScaffoldError;
use crate::prompter::Prompter;
use anyhow::{Context, Result};
use tokio::fs;

/// Make sure nothing is in the way of the new project.
///
/// An existing directory is removed only after the user agrees; otherwise
/// `ScaffoldError::Cancelled` is returned and nothing on disk changes.
pub async fn clear_existing<P: Prompter>(target: &ProjectTarget, prompter: &mut P) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    if !prompter.confirm_overwrite(&target.name, &target.path)? {
        return Err(ScaffoldError::Cancelled.into());
    }

    let removed = if target.path.is_dir() {
        fs::remove_dir_all(&target.path).await
    } else {
        fs::remove_file(&target.path).await
    };

    removed.with_context(|| format!("Failed to remove {}", target.path.display()))
}

//! Invocation context: where the project goes, and clearing the way for it

mod guard;

pub use guard::clear_existing;

use crate::error::ScaffoldError;
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// The project being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub name: String,
    /// Always `<cwd>/<name>`
    pub path: PathBuf,
}

impl ProjectTarget {
    /// Resolve `name` against the working directory.
    ///
    /// Names that would escape `cwd` are refused, since an existing target
    /// may be deleted.
    pub fn resolve(cwd: &Path, name: &str) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            path: cwd.join(name),
        })
    }

    /// Directory the project is created from
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = |reason| ScaffoldError::InvalidProjectName {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }

    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir => return Err(invalid("must not contain '.' segments")),
            Component::ParentDir => return Err(invalid("must not contain '..' segments")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be relative to the current directory"))
            }
        }
    }

    Ok(())
}

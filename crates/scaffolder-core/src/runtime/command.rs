//! External command execution
//!
//! Every stage that shells out goes through a [`CommandRunner`]. The real
//! runner inherits the terminal so npm, create-vite and shadcn can prompt
//! the user and stream their progress directly.

use crate::error::ScaffoldError;
use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` runs in the process's current directory
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Run the command from the given directory
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run the command and wait for it; a non-zero exit is an error
    async fn run(&mut self, spec: &CommandSpec) -> Result<()>;
}

/// Runner that spawns real processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&mut self, spec: &CommandSpec) -> Result<()> {
        let command_line = spec.to_string();
        println!();
        println!("{} {}", "Running:".dimmed(), command_line.yellow());
        println!();

        let mut command = TokioCommand::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| ScaffoldError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        // No timeout: a hung installer hangs the run, same as typing the command yourself
        let status = child.wait().await.map_err(|source| ScaffoldError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: command_line,
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}

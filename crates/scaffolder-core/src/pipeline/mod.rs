//! The scaffolding pipeline
//!
//! A run is the fixed sequence of stages in [`PIPELINE`]. Each stage is a
//! short plan of [`Action`]s (run a command, write a file, create a
//! directory) executed in order by the [`Executor`]. The first failing
//! action aborts the run; nothing is rolled back.
//!
//! Several stages write the same files. The last writer wins, and the
//! order of [`PIPELINE`] is what decides it:
//!
//! - `Stage::Styling` runs `tailwindcss init` and then overwrites its output
//! - `Stage::TypeScript` overwrites the tsconfig files the Vite template shipped
//! - `Stage::Extras` (dashboard variant) rewrites the `vite.config.ts` written
//!   by `Stage::ComponentLibrary`, so it must stay last

pub mod extras;
pub mod stages;

pub use extras::Library;

use crate::product::ProductConfig;
use crate::prompter::Prompter;
use crate::runtime::{CommandRunner, CommandSpec};
use crate::templates::{ensure_dir, write_file};
use crate::ProjectTarget;
use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `npm create vite` into the target directory
    Bootstrap,
    /// Bare `npm install`
    InstallBase,
    /// Tailwind CSS 3, PostCSS, autoprefixer
    Styling,
    /// tsconfig files with the `@/*` alias
    TypeScript,
    /// shadcn/ui and the base `vite.config.ts`
    ComponentLibrary,
    /// Optional libraries, then the dashboard variant
    Extras,
}

/// Execution order. `ComponentLibrary` must precede `Extras`.
pub const PIPELINE: [Stage; 6] = [
    Stage::Bootstrap,
    Stage::InstallBase,
    Stage::Styling,
    Stage::TypeScript,
    Stage::ComponentLibrary,
    Stage::Extras,
];

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Bootstrap => "Creating project with Vite",
            Stage::InstallBase => "Installing dependencies",
            Stage::Styling => "Configuring Tailwind CSS",
            Stage::TypeScript => "Configuring TypeScript path aliases",
            Stage::ComponentLibrary => "Configuring shadcn/ui",
            Stage::Extras => "Extra libraries",
        }
    }
}

/// One step of a stage. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(CommandSpec),
    Write { path: PathBuf, contents: String },
    EnsureDir(PathBuf),
}

impl Action {
    pub fn write(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Action::Write {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Run(spec) => write!(f, "{}", spec),
            Action::Write { path, .. } => write!(f, "write {}", path.display()),
            Action::EnsureDir(path) => write!(f, "mkdir -p {}", path.display()),
        }
    }
}

/// What the user chose along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub libraries: Vec<Library>,
    pub variant: bool,
}

/// Runs stages against one project directory
pub struct Executor<'a, C: ProductConfig, R: CommandRunner> {
    config: &'a C,
    target: &'a ProjectTarget,
    runner: R,
}

impl<'a, C: ProductConfig, R: CommandRunner> Executor<'a, C, R> {
    pub fn new(config: &'a C, target: &'a ProjectTarget, runner: R) -> Self {
        Self {
            config,
            target,
            runner,
        }
    }

    /// Hand back the runner (tests inspect what it recorded)
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Run every stage of [`PIPELINE`] in order
    pub async fn run<P: Prompter>(&mut self, prompter: &mut P) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for stage in PIPELINE {
            println!();
            println!("{} {}", "◆".cyan(), stage.title().bold());

            match stage {
                Stage::Extras => summary = self.run_extras(prompter).await?,
                fixed => {
                    let actions = stages::plan(fixed, self.config, self.target);
                    self.apply_all(&actions).await?;
                }
            }
        }

        Ok(summary)
    }

    /// Ask for optional libraries, install them, then offer the dashboard variant
    pub async fn run_extras<P: Prompter>(&mut self, prompter: &mut P) -> Result<RunSummary> {
        let libraries = prompter.select_libraries(&Library::ALL)?;

        if !libraries.is_empty() {
            let names: Vec<&str> = libraries.iter().map(Library::package).collect();
            println!("{} {}", "Installing:".cyan(), names.join(", "));
        }
        let actions = extras::install_plan(self.config, self.target, &libraries);
        self.apply_all(&actions).await?;

        let mut variant = false;
        if extras::offers_variant(&libraries) && prompter.confirm_variant()? {
            variant = true;
            let actions = extras::variant_plan(self.config, self.target);
            self.apply_all(&actions).await?;
        }

        Ok(RunSummary { libraries, variant })
    }

    async fn apply_all(&mut self, actions: &[Action]) -> Result<()> {
        for action in actions {
            self.apply(action).await?;
        }
        Ok(())
    }

    /// Execute one action; relative paths land inside the project
    pub async fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Run(spec) => self.runner.run(spec).await,
            Action::Write { path, contents } => {
                let full = self.target.path.join(path);
                write_file(&full, contents).await?;
                println!("  {} {}", "wrote".green(), path.display());
                Ok(())
            }
            Action::EnsureDir(path) => ensure_dir(&self.target.path.join(path)).await,
        }
    }
}

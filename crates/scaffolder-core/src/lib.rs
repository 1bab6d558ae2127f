//! Scaffolder Core - Shared library for the React stack project scaffolder
//!
//! This library creates a Vite + React (SWC, TypeScript) application, layers
//! Tailwind CSS, path aliases and shadcn/ui on top of it, then installs the
//! optional libraries the user picks.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Runtime detection, external command execution,
//!   fixed file templates and the file writer
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the ordered
//!   stage pipeline (`pipeline::PIPELINE`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{pipeline, project, runtime::ProcessRunner, ProjectTarget};
//!
//! let target = ProjectTarget::resolve(&std::env::current_dir()?, "my-app")?;
//! project::clear_existing(&target, &mut prompter).await?;
//!
//! let mut executor = pipeline::Executor::new(&config, &target, ProcessRunner);
//! let summary = executor.run(&mut prompter).await?;
//! ```

pub mod error;
pub mod pipeline;
pub mod product;
pub mod project;
pub mod prompter;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use pipeline::{Library, Stage, PIPELINE};
pub use product::ProductConfig;
pub use project::ProjectTarget;
pub use prompter::Prompter;
pub use runtime::{check_runtimes, CommandRunner, CommandSpec, ProcessRunner, RuntimeInfo};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// Project name used when none is given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

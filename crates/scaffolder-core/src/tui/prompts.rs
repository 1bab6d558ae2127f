//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::pipeline::{Executor, Library, RunSummary};
use crate::product::ProductConfig;
use crate::project::{clear_existing, ProjectTarget};
use crate::prompter::Prompter;
use crate::runtime::{check, ProcessRunner};
use anyhow::{Context, Result};
use std::path::Path;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CreateArgs {
    /// Name of the project directory to create (default: my-app)
    pub project_name: Option<String>,
}

/// Terminal prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn confirm_overwrite(&mut self, project_name: &str, path: &Path) -> Result<bool> {
        cliclack::log::warning(format!("{} already exists", path.display()))?;

        let overwrite = cliclack::confirm(format!(
            "The folder {} already exists. Overwrite it?",
            project_name
        ))
        .initial_value(false)
        .interact()?;

        Ok(overwrite)
    }

    fn select_libraries(&mut self, choices: &[Library]) -> Result<Vec<Library>> {
        let mut multi = cliclack::multiselect("Which extra libraries do you want to install?");
        for library in choices {
            multi = multi.item(*library, library.display_name(), library.package());
        }

        let selected: Vec<Library> = multi.required(false).interact()?;

        // Keep the order the choices are listed in
        Ok(choices
            .iter()
            .filter(|l| selected.contains(l))
            .copied()
            .collect())
    }

    fn confirm_variant(&mut self) -> Result<bool> {
        let variant = cliclack::confirm("Will this project be a Sankhya BI dashboard?")
            .initial_value(false)
            .interact()?;

        Ok(variant)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Check Node.js and the package manager
    check_runtimes(config)?;

    // Step 2: Resolve the project directory
    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let project_name = args
        .project_name
        .as_deref()
        .unwrap_or(config.default_project_name());
    let target = ProjectTarget::resolve(&current_dir, project_name)?;
    cliclack::log::info(format!("Project directory: {}", target.path.display()))?;

    // Step 3: Clear an existing directory (only with consent)
    let mut prompter = CliclackPrompter;
    if let Err(e) = clear_existing(&target, &mut prompter).await {
        if e.downcast_ref::<ScaffoldError>()
            .is_some_and(ScaffoldError::is_cancelled)
        {
            cliclack::outro_cancel("Operation cancelled.")?;
        }
        return Err(e);
    }

    // Step 4: Run the pipeline
    let mut executor = Executor::new(config, &target, ProcessRunner);
    let summary = executor.run(&mut prompter).await?;

    // Step 5: Show what was set up and the next steps
    print_summary(&summary)?;
    print_next_steps(config, &target)?;

    Ok(())
}

fn check_runtimes<C: ProductConfig>(config: &C) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes(config.package_manager()) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

            let node_warning = runtimes
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref())
                .and_then(check::check_node_version);
            if let Some(warning) = node_warning {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing runtimes and try again.");
        }
    }
}

fn print_summary(summary: &RunSummary) -> Result<()> {
    println!();
    if summary.libraries.is_empty() {
        cliclack::log::info("No extra libraries selected")?;
    } else {
        let names: Vec<&str> = summary.libraries.iter().map(Library::package).collect();
        cliclack::log::success(format!("Installed: {}", names.join(", ")))?;
    }

    if summary.variant {
        cliclack::log::success(
            "Sankhya BI dashboard configured: fill in .env before running queries",
        )?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, target: &ProjectTarget) -> Result<()> {
    let steps = config.next_steps(&target.path, &target.name);

    println!();
    println!("  Project ready! Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

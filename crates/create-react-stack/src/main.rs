//! create-react-stack - Vite + React + Tailwind + shadcn/ui project scaffolding

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ScaffoldError};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

/// React stack product configuration
#[derive(Clone)]
pub struct ReactStackConfig;

impl ProductConfig for ReactStackConfig {
    fn name(&self) -> &'static str {
        "create-react-stack"
    }

    fn display_name(&self) -> &'static str {
        "create-react-stack"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Vite + React + Tailwind + shadcn/ui projects"
    }

    fn next_steps(&self, _dir: &Path, project_name: &str) -> Vec<String> {
        vec![format!("cd {}", project_name), "npm run dev".to_string()]
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub create: CreateArgs,
}

impl Args {
    /// Parse arguments, taking the command name and about text from the product
    pub fn try_parse_with<C, I, T>(config: &C, args: I) -> Result<Self, clap::Error>
    where
        C: ProductConfig,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut matches = Self::command()
            .name(config.name())
            .about(config.cli_description())
            .try_get_matches_from(args)?;
        Self::from_arg_matches_mut(&mut matches)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = ReactStackConfig;
    let args = Args::try_parse_with(&config, std::env::args_os()).unwrap_or_else(|e| e.exit());
    let result = scaffolder_core::run(&config, args.create).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported by the prompt
        Err(e)
            if e.downcast_ref::<ScaffoldError>()
                .is_some_and(ScaffoldError::is_cancelled) =>
        {
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

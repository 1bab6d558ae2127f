//! Optional libraries and the Sankhya BI dashboard variant

use super::Action;
use crate::product::ProductConfig;
use crate::runtime::CommandSpec;
use crate::templates::{ENV_FILE, QUERY_MODULE, VITE_CONFIG_VARIANT, VITE_ENV_DTS};
use crate::ProjectTarget;
use std::fmt;
use std::path::PathBuf;

/// Libraries offered after the base stack is in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    ReactHookForm,
    ReactQuery,
    Axios,
    Zod,
}

impl Library {
    /// Every choice, in the order it is offered
    pub const ALL: [Library; 4] = [
        Library::ReactHookForm,
        Library::ReactQuery,
        Library::Axios,
        Library::Zod,
    ];

    /// npm package name; also the identifier used on the command line
    pub fn package(&self) -> &'static str {
        match self {
            Library::ReactHookForm => "react-hook-form",
            Library::ReactQuery => "@tanstack/react-query",
            Library::Axios => "axios",
            Library::Zod => "zod",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Library::ReactHookForm => "React Hook Form",
            Library::ReactQuery => "React Query",
            Library::Axios => "Axios",
            Library::Zod => "Zod (schema validation)",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One batched install of the selected libraries; nothing when none are selected
pub fn install_plan<C: ProductConfig>(
    config: &C,
    target: &ProjectTarget,
    selected: &[Library],
) -> Vec<Action> {
    if selected.is_empty() {
        return Vec::new();
    }

    let args = std::iter::once("install").chain(selected.iter().map(Library::package));
    vec![Action::Run(
        CommandSpec::new(config.package_manager(), args).in_dir(&target.path),
    )]
}

/// Whether the selection unlocks the dashboard question
pub fn offers_variant(selected: &[Library]) -> bool {
    selected.contains(&Library::Axios)
}

/// Dashboard setup: data-access module, build plugin, env scaffolding.
///
/// Runs after the component-library stage, so its `vite.config.ts`
/// replaces the one written there.
pub fn variant_plan<C: ProductConfig>(config: &C, target: &ProjectTarget) -> Vec<Action> {
    let mut actions = vec![
        Action::EnsureDir(PathBuf::from("src/lib")),
        Action::write("src/lib/query.ts", QUERY_MODULE),
    ];

    let packages = config.variant_packages();
    if !packages.is_empty() {
        let args = std::iter::once("install").chain(packages.iter().copied());
        actions.push(Action::Run(
            CommandSpec::new(config.package_manager(), args).in_dir(&target.path),
        ));
    }

    actions.extend([
        Action::write("vite.config.ts", VITE_CONFIG_VARIANT),
        Action::write(".env", ENV_FILE),
        Action::write(".env.example", ENV_FILE),
        Action::write("src/vite-env.d.ts", VITE_ENV_DTS),
    ]);

    actions
}

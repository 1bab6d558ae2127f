//! Plans for the non-interactive stages

use super::{Action, Stage};
use crate::product::ProductConfig;
use crate::runtime::CommandSpec;
use crate::templates::{
    tsconfig_app_json, tsconfig_json, INDEX_CSS, TAILWIND_CONFIG, VITE_CONFIG,
};
use crate::ProjectTarget;

/// Vite template materialized by the bootstrap stage
pub const VITE_TEMPLATE: &str = "react-swc-ts";

/// Pinned shadcn CLI; later releases dropped Tailwind 3 support from `init`
pub const SHADCN_CLI: &str = "shadcn@2.3.0";

/// Actions for a fixed stage. `Stage::Extras` is interactive and has none.
pub fn plan<C: ProductConfig>(stage: Stage, config: &C, target: &ProjectTarget) -> Vec<Action> {
    let pm = config.package_manager();
    let runner = config.package_runner();
    let in_project = |program: &str, args: &[&str]| {
        Action::Run(CommandSpec::new(program, args.iter().copied()).in_dir(&target.path))
    };

    match stage {
        Stage::Bootstrap => vec![Action::Run(
            CommandSpec::new(
                pm,
                [
                    "create",
                    "vite@latest",
                    target.name.as_str(),
                    "--",
                    "--template",
                    VITE_TEMPLATE,
                ],
            )
            .in_dir(target.parent()),
        )],
        Stage::InstallBase => vec![in_project(pm, &["install"])],
        Stage::Styling => vec![
            in_project(pm, &["install", "-D", "tailwindcss@3", "postcss", "autoprefixer"]),
            in_project(runner, &["tailwindcss", "init", "-p"]),
            Action::write("tailwind.config.js", TAILWIND_CONFIG),
            Action::write("src/index.css", INDEX_CSS),
        ],
        Stage::TypeScript => vec![
            Action::write("tsconfig.json", tsconfig_json()),
            Action::write("tsconfig.app.json", tsconfig_app_json()),
        ],
        Stage::ComponentLibrary => vec![
            in_project(pm, &["install", "-D", "@types/node"]),
            Action::write("vite.config.ts", VITE_CONFIG),
            in_project(runner, &[SHADCN_CLI, "init"]),
            in_project(runner, &["shadcn", "add", "button"]),
        ],
        Stage::Extras => Vec::new(),
    }
}

//! Questions asked during a run
//!
//! The pipeline only talks to this trait; the cliclack front-end implements
//! it for the terminal and tests script the answers.

use crate::pipeline::Library;
use anyhow::Result;
use std::path::Path;

pub trait Prompter {
    /// The target directory exists; may it be deleted? Defaults to no.
    fn confirm_overwrite(&mut self, project_name: &str, path: &Path) -> Result<bool>;

    /// Pick any subset of the optional libraries, in the order they are listed
    fn select_libraries(&mut self, choices: &[Library]) -> Result<Vec<Library>>;

    /// Is this project a Sankhya BI dashboard? Defaults to no.
    fn confirm_variant(&mut self) -> Result<bool>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Answers every question from a fixed script
    #[derive(Debug, Default, Clone)]
    pub struct ScriptedPrompter {
        pub overwrite: bool,
        pub libraries: Vec<Library>,
        pub variant: bool,
        /// Questions asked, in order
        pub asked: Vec<&'static str>,
    }

    impl ScriptedPrompter {
        pub fn selecting(libraries: &[Library]) -> Self {
            Self {
                libraries: libraries.to_vec(),
                ..Self::default()
            }
        }

        pub fn with_variant(mut self) -> Self {
            self.variant = true;
            self
        }

        pub fn with_overwrite(mut self) -> Self {
            self.overwrite = true;
            self
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm_overwrite(&mut self, _project_name: &str, _path: &Path) -> Result<bool> {
            self.asked.push("overwrite");
            Ok(self.overwrite)
        }

        fn select_libraries(&mut self, choices: &[Library]) -> Result<Vec<Library>> {
            self.asked.push("libraries");
            Ok(self
                .libraries
                .iter()
                .filter(|l| choices.contains(l))
                .copied()
                .collect())
        }

        fn confirm_variant(&mut self) -> Result<bool> {
            self.asked.push("variant");
            Ok(self.variant)
        }
    }
}

//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface the binary implements to configure the
//! scaffolding behavior: identity, package tooling, and the variant branch.

use std::path::Path;

/// Configuration trait for the scaffolded product
///
/// The binary implements this trait to define:
/// - Product identity (name, display name)
/// - Package manager and package runner commands
/// - Packages installed by the variant branch
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Project name used when none is given
    fn default_project_name(&self) -> &'static str {
        crate::DEFAULT_PROJECT_NAME
    }

    /// Package manager binary (install, create)
    fn package_manager(&self) -> &'static str {
        "npm"
    }

    /// Package runner binary (one-off CLIs such as tailwindcss and shadcn)
    fn package_runner(&self) -> &'static str {
        "npx"
    }

    /// Extra packages installed when the dashboard variant is enabled
    fn variant_packages(&self) -> &'static [&'static str] {
        &["@insulino/vite-plugin-2sankhyabi"]
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, project_name: &str) -> Vec<String>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal product used by the unit tests
    #[derive(Clone)]
    pub struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test-stack"
        }

        fn display_name(&self) -> &'static str {
            "Test Stack"
        }

        fn cli_description(&self) -> &'static str {
            "test"
        }

        fn next_steps(&self, _dir: &Path, project_name: &str) -> Vec<String> {
            vec![format!("cd {}", project_name), "npm run dev".to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::TestProduct;
    use super::*;

    #[test]
    fn test_default_tooling() {
        let product = TestProduct;
        assert_eq!(product.default_project_name(), "my-app");
        assert_eq!(product.package_manager(), "npm");
        assert_eq!(product.package_runner(), "npx");
        assert_eq!(
            product.variant_packages(),
            &["@insulino/vite-plugin-2sankhyabi"]
        );
    }
}

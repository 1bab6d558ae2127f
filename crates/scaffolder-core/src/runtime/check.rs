//! Runtime detection for Node.js and npm

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the Vite template supports
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the given package manager (npm by default) is available
pub fn check_npm(package_manager: &'static str) -> RuntimeInfo {
    probe(package_manager, package_manager)
}

/// Parse version string, handling a leading 'v' (`node --version` prints `v20.11.0`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Returns a warning message if the installed Node.js is older than the template expects
pub fn check_node_version(node_version: &str) -> Option<String> {
    let installed = parse_version(node_version).ok()?;
    let minimum = Version::parse(MIN_NODE_VERSION).ok()?;

    if installed < minimum {
        Some(format!(
            "Node.js {} detected, but Vite needs {} or newer.\n\
             The scaffold may fail. Upgrade from https://nodejs.org",
            node_version.trim(),
            MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Check that Node.js and the package manager are installed.
///
/// Fails with the list of missing runtimes; otherwise returns what was found.
pub fn check_runtimes(package_manager: &'static str) -> Result<Vec<RuntimeInfo>> {
    let results = vec![check_node(), check_npm(package_manager)];
    missing_runtimes(&results)?;
    Ok(results)
}

fn missing_runtimes(results: &[RuntimeInfo]) -> Result<()> {
    let missing: Vec<String> = results
        .iter()
        .filter(|r| !r.available)
        .map(|r| format!("  - {} (install from https://nodejs.org)", r.name))
        .collect();

    if !missing.is_empty() {
        anyhow::bail!("Missing required runtimes:\n{}", missing.join("\n"));
    }

    Ok(())
}

//! Runtime detection and external command execution
//!
//! This module provides:
//! - Node.js / npm detection before anything is scaffolded
//! - The command runner every pipeline stage shells out through

pub mod check;
pub mod command;

pub use check::{check_node, check_npm, check_node_version, check_runtimes, RuntimeInfo};
pub use command::{CommandRunner, CommandSpec, ProcessRunner};

//! Fixed file templates and the writer that lays them down
//!
//! This module provides:
//! - The hardcoded bodies written into the generated project
//! - `tsconfig` generation with the `@/*` path alias
//! - Overwriting file writes and recursive directory creation

pub mod files;
pub mod tsconfig;
pub mod writer;

pub use files::{
    ENV_FILE, INDEX_CSS, QUERY_MODULE, TAILWIND_CONFIG, VITE_CONFIG, VITE_CONFIG_VARIANT,
    VITE_ENV_DTS,
};
pub use tsconfig::{tsconfig_app_json, tsconfig_json};
pub use writer::{ensure_dir, write_file};

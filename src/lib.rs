// src/lib.rs - Library interface for internal module access

pub mod config;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod manifest;
pub mod plot_framework;
pub mod plot_functions;
pub mod series_labels;
pub mod types;

// Crate version, preferring a git-derived version when the build provides one.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}

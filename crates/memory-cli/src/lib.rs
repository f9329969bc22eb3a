//! memory-dims library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (resolve, lookup, models)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::{
    format_lookup, format_models, init_logging, list_models, lookup_dims, render_config,
    resolve_config, EmbedderOverrides,
};

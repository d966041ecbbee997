//! TOML configuration with embedded defaults
//!
//! Precedence: schema defaults < TOML file < command-line flags
//! (applied by `arguments::Cli::apply_to`).

#[macro_use]
mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::*;
pub use utils::{load_config_from_path, parse_config, validate_config};

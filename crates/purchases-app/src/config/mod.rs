//! Configuration file parsing
//!
//! Supports a single TOML file, by default
//! `<config_dir>/purchase-history/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;

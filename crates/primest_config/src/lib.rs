//! Parsing and validation of `primest.toml` estimator configuration files.
//!
//! Every section is optional; an absent file section yields the built-in
//! defaults (70% accuracy, 5 ns default cycle, 40/45 nm technologies,
//! embedded characterization tables, 128x32 SRAM energy cap and 128x16
//! SRAM area cap).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;

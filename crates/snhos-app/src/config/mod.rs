//! Configuration file parsing for SNH_OS
//!
//! Supports `<config_dir>/snh-os/config.toml` or an explicit `--config`
//! path. Command-line flags are applied on top with [`Settings::apply`].

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;

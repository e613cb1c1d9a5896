//! Configuration file management.
//!
//! Settings are merged in priority order: CLI flags, then
//! `~/.config/aide/config.toml`, then built-in defaults.

mod manager;

pub use manager::{
    AideConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config,
};

//! XDG-style path utilities for configuration.
//!
//! Prefers XDG Base Directory Specification conventions over OS-specific
//! locations, so the config lives in the same place on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for aide.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/aide` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/aide` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("aide"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("aide"))
}

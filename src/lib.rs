//! # aide - Corporate AI Assistant
//!
//! `aide` renders a bilingual (Russian/English) landing page in the terminal
//! and embeds a chat widget that forwards questions to a remote assistant
//! endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the landing page
//! aide --lang en
//!
//! # Chat interactively
//! aide chat
//!
//! # One-shot question
//! aide ask "What can you do?"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/aide/config.toml`:
//!
//! ```toml
//! [aide]
//! language = "en"
//! endpoint = "https://example.com/chat"
//! timeout_secs = 30
//! ```

/// Client for the remote assistant endpoint.
pub mod api;

/// Chat session state and the interactive chat widget.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Localized display strings.
pub mod i18n;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

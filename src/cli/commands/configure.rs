//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select, Text};

use crate::api::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::config::{AideConfig, ConfigFile, ConfigManager};
use crate::i18n::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the stored defaults. Otherwise lets the user set the
/// default language, endpoint and timeout interactively.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_defaults(&config, &manager);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config, &manager);

    let language = select_language(config.aide.language)?;
    let endpoint = input_endpoint(config.aide.endpoint.as_deref())?;
    let timeout_secs = input_timeout(config.aide.timeout_secs)?;

    config.aide = AideConfig {
        language: Some(language),
        endpoint: Some(endpoint),
        timeout_secs: Some(timeout_secs),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile, manager: &ConfigManager) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .aide
            .language
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .aide
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        config
            .aide
            .timeout_secs
            .map_or_else(|| Style::secondary("(not set)"), |t| Style::value(format!("{t}s")))
    );
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn select_language(default: Option<Language>) -> Result<Language> {
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.name()))
        .collect();

    let default_index = default
        .and_then(|d| Language::ALL.iter().position(|lang| *lang == d))
        .unwrap_or(0);

    let selection = Select::new("Default language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);
    code.parse()
}

fn input_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("URL that accepts POST {\"message\", \"language\"}")
        .prompt()?;

    let endpoint = endpoint.trim();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!("Endpoint must be an http(s) URL");
    }

    Ok(endpoint.to_string())
}

fn input_timeout(default: Option<u64>) -> Result<u64> {
    let timeout = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(default.unwrap_or(DEFAULT_TIMEOUT_SECS))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    if timeout == 0 {
        bail!("Timeout must be greater than zero");
    }

    Ok(timeout)
}

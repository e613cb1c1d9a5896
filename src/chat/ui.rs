//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::i18n::Bundle;
use crate::ui::Style;

use super::message::{Message, Role};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(bundle: &Bundle) {
    println!(
        "{} {} - {}",
        Style::header("aide"),
        Style::version(format!("v{VERSION}")),
        bundle.chat.title
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Formats one history entry for the terminal.
pub fn format_message(message: &Message, bundle: &Bundle) -> String {
    match message.role {
        Role::User => format!("{} {}", Style::label("you:"), message.content),
        Role::Assistant => format!(
            "{} {}",
            Style::value(format!("{}:", bundle.chat.title)),
            message.content
        ),
    }
}

pub fn print_message(message: &Message, bundle: &Bundle) {
    println!("{}", format_message(message, bundle));
    println!();
}

pub fn print_config(config: &ResolvedConfig, language: &str) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("language"),
        Style::value(language)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}       {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}         {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}  {}",
        Style::command("/lang [ru|en]"),
        Style::secondary("Switch language and start a new conversation")
    );
    println!(
        "  {}         {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

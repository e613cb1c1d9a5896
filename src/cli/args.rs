use clap::{Parser, Subcommand};

use super::commands::page::Section;
use crate::config::ResolveOptions;
use crate::i18n::Language;

#[derive(Parser, Debug)]
#[command(name = "aide")]
#[command(about = "Corporate AI assistant: landing page and chat widget")]
#[command(version)]
pub struct Args {
    /// Interface language (ru, en)
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<Language>,

    /// Chat endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Suppress status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// CLI overrides for config resolution.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            language: self.lang,
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the landing page (default)
    Page {
        /// Print a single section
        #[arg(short, long, value_enum)]
        section: Option<Section>,
    },
    /// Interactive chat with the assistant
    Chat,
    /// Send one message and print the reply
    Ask {
        /// Message to send
        message: String,
    },
    /// List supported languages
    Languages,
    /// Configure aide defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["aide", "chat", "--lang", "en", "--timeout", "5"]).unwrap();
        assert!(matches!(args.command, Some(Command::Chat)));
        assert_eq!(args.lang, Some(Language::En));
        assert_eq!(args.timeout, Some(5));
    }

    #[test]
    fn test_invalid_lang_is_rejected() {
        let err = Args::try_parse_from(["aide", "--lang", "de"]).unwrap_err();
        assert!(err.to_string().contains("Invalid language code"));
    }

    #[test]
    fn test_page_section_parses() {
        let args = Args::try_parse_from(["aide", "page", "--section", "faq"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Page {
                section: Some(Section::Faq)
            })
        ));
    }

    #[test]
    fn test_resolve_options_carry_overrides() {
        let args = Args::try_parse_from(["aide", "-e", "http://localhost/chat", "ask", "hi"]).unwrap();
        let options = args.resolve_options();
        assert_eq!(options.endpoint.as_deref(), Some("http://localhost/chat"));
        assert!(options.language.is_none());
    }
}

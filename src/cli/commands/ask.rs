//! One-shot message command handler.

use anyhow::{Result, bail};

use super::load_config;
use crate::api::AssistantClient;
use crate::chat::{ChatSession, THINKING};
use crate::config::{ResolveOptions, ResolvedConfig};
use crate::ui::Spinner;

pub async fn run_ask(message: &str, options: &ResolveOptions) -> Result<()> {
    let config = load_config(options)?;
    let reply = ask(message, &config).await?;
    println!("{reply}");
    Ok(())
}

/// Sends `message` through a fresh session and returns the settled reply.
///
/// Reply errors come back as their localized text, not as `Err`.
pub async fn ask(message: &str, config: &ResolvedConfig) -> Result<String> {
    let client = AssistantClient::new(config.endpoint.clone(), config.timeout)?;
    let mut session = ChatSession::new(config.language);
    session.update_input(message);

    let spinner = Spinner::new(THINKING);
    let settled = session.send(&client).await;
    spinner.stop();

    if settled.is_none() {
        bail!("Message is empty");
    }

    Ok(session
        .last_message()
        .map(|m| m.content.clone())
        .unwrap_or_default())
}

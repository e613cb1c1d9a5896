use anyhow::Result;

use super::load_config;
use crate::chat::ChatWidget;
use crate::config::ResolveOptions;

pub async fn run_chat(options: &ResolveOptions) -> Result<()> {
    let config = load_config(options)?;
    let mut widget = ChatWidget::new(config)?;
    widget.run().await
}

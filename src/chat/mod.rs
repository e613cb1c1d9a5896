//! Chat widget: session state and the interactive terminal loop.
//!
//! [`ChatSession`] holds the conversation and is driven by [`ChatWidget`],
//! which renders it and performs the requests.

/// Slash command parsing and autocomplete.
pub mod command;
mod message;
mod repl;
mod session;
mod ui;

pub use message::{Message, Role, THINKING};
pub use repl::ChatWidget;
pub use session::{ChatSession, PendingReply, ReplyOutcome, Settled};

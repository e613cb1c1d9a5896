use anyhow::Result;

use super::message::{Message, THINKING};
use crate::api::{AssistantClient, ChatReplyBody, ChatRequest};
use crate::i18n::{self, Bundle, Language};

/// How an outstanding request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The endpoint answered with reply text.
    Reply(String),
    /// The endpoint answered, but without usable reply text.
    EmptyReply,
    /// The request could not be completed or its body could not be parsed.
    TransportFailure,
}

impl ReplyOutcome {
    /// Classifies the result of [`AssistantClient::send`].
    pub fn from_result(result: Result<ChatReplyBody>) -> Self {
        match result {
            Ok(body) => body
                .reply_text()
                .map_or(Self::EmptyReply, |text| Self::Reply(text.to_string())),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "chat request failed");
                Self::TransportFailure
            }
        }
    }
}

/// Result of settling a [`PendingReply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The placeholder was replaced.
    Applied,
    /// The session moved on (language switch or cancellation); the reply was dropped.
    Stale,
}

/// Ticket for the single in-flight request of a session.
///
/// Returned by [`ChatSession::begin_send`] and consumed by
/// [`ChatSession::settle`], so a reply can be applied at most once.
#[derive(Debug)]
pub struct PendingReply {
    id: u64,
    generation: u64,
    index: usize,
    request: ChatRequest,
}

impl PendingReply {
    /// Payload to POST to the endpoint.
    pub const fn request(&self) -> &ChatRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    id: u64,
    generation: u64,
    index: usize,
    language: Language,
}

/// State of one chat widget.
///
/// Owns the message history, the text being typed and the active language.
/// At most one request is in flight; its placeholder is addressed by a stable
/// slot rather than by position, and every language switch starts a new
/// generation so replies addressed to an older one are dropped.
#[derive(Debug)]
pub struct ChatSession {
    language: Language,
    messages: Vec<Message>,
    pending_input: String,
    generation: u64,
    next_request_id: u64,
    pending: Option<Slot>,
}

impl ChatSession {
    /// Creates a session seeded with the welcome message for `language`.
    pub fn new(language: Language) -> Self {
        let mut session = Self {
            language,
            messages: Vec::new(),
            pending_input: String::new(),
            generation: 0,
            next_request_id: 0,
            pending: None,
        };
        session.initialize(language);
        session
    }

    /// Resets the history to a single welcome message.
    ///
    /// Starts a new generation, so an outstanding reply will be dropped.
    pub fn initialize(&mut self, language: Language) {
        self.messages.clear();
        self.messages
            .push(Message::assistant(i18n::resolve(language).chat.welcome));
        self.generation += 1;
        self.pending = None;
    }

    /// Switches language, discarding all prior history.
    ///
    /// Returns `false` if `language` is already active.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        tracing::debug!(from = %self.language, to = %language, "switching language");
        self.language = language;
        self.initialize(language);
        true
    }

    pub fn update_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Synchronous half of a send.
    ///
    /// Appends the user message and the placeholder, clears the input, and
    /// returns the ticket for the request to perform. Returns `None` and
    /// leaves the session untouched if the input is blank or another request
    /// is still pending.
    pub fn begin_send(&mut self) -> Option<PendingReply> {
        if self.pending_input.trim().is_empty() {
            return None;
        }
        if self.pending.is_some() {
            tracing::debug!("send rejected: a reply is still pending");
            return None;
        }

        let text = std::mem::take(&mut self.pending_input);
        self.messages.push(Message::user(text.clone()));
        self.messages.push(Message::assistant(THINKING));

        let slot = Slot {
            id: self.next_request_id,
            generation: self.generation,
            index: self.messages.len() - 1,
            language: self.language,
        };
        self.next_request_id += 1;
        self.pending = Some(slot);

        Some(PendingReply {
            id: slot.id,
            generation: slot.generation,
            index: slot.index,
            request: ChatRequest {
                message: text,
                language: slot.language,
            },
        })
    }

    /// Settling half of a send.
    ///
    /// Replaces the ticket's placeholder with the reply, or with the error
    /// string of the language active when the message was sent.
    pub fn settle(&mut self, ticket: PendingReply, outcome: ReplyOutcome) -> Settled {
        let Some(slot) = self.pending else {
            tracing::debug!(request = ticket.id, "dropping reply: nothing pending");
            return Settled::Stale;
        };
        if slot.id != ticket.id || slot.generation != ticket.generation {
            tracing::debug!(request = ticket.id, "dropping stale reply");
            return Settled::Stale;
        }

        let chat = &i18n::resolve(slot.language).chat;
        let content = match outcome {
            ReplyOutcome::Reply(text) => text,
            ReplyOutcome::EmptyReply => chat.empty_reply.to_string(),
            ReplyOutcome::TransportFailure => chat.transport_error.to_string(),
        };
        self.replace_placeholder(ticket.index, content);
        Settled::Applied
    }

    /// Abandons the outstanding request, if any.
    ///
    /// The placeholder is replaced with the localized cancellation notice and
    /// a late reply for it will be reported as [`Settled::Stale`].
    pub fn cancel(&mut self) -> bool {
        let Some(slot) = self.pending else {
            return false;
        };
        tracing::debug!(request = slot.id, "cancelling pending request");
        let notice = i18n::resolve(slot.language).chat.cancelled;
        self.replace_placeholder(slot.index, notice.to_string());
        true
    }

    /// Sends the current input and waits for the reply.
    ///
    /// Returns `None` if nothing was sent. Reply errors are reported through
    /// the message history, never as an `Err`.
    pub async fn send(&mut self, client: &AssistantClient) -> Option<Settled> {
        let ticket = self.begin_send()?;
        let result = client.send(ticket.request()).await;
        Some(self.settle(ticket, ReplyOutcome::from_result(result)))
    }

    fn replace_placeholder(&mut self, index: usize, content: String) {
        if let Some(message) = self.messages.get_mut(index) {
            *message = Message::assistant(content);
        }
        self.pending = None;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Strings for the active language.
    pub fn bundle(&self) -> &'static Bundle {
        i18n::resolve(self.language)
    }
}

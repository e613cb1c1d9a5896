//! Client for the remote assistant endpoint.

mod client;

pub use client::{
    AssistantClient, ChatReplyBody, ChatRequest, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};

//! Chat assistant that forwards the conversation to an OpenAI-compatible
//! chat-completions API (DeepSeek by default).

mod client;
mod conversation;
mod message;

pub use client::{ChatClient, ChatError, ChatSettings, DeepSeekClient};
pub use conversation::{APOLOGY, Conversation, GREETING, SendOutcome};
pub use message::{ChatMessage, Role};

use tracing::{info, warn};

use crate::client::{ChatClient, ChatError};
use crate::message::ChatMessage;

/// First assistant message of every conversation.
pub const GREETING: &str = "您好！欢迎访问美美生活！我们专注于为中国客户提供美国公司注册与税务申报服务。请问有什么可以帮助您的吗？";

/// Shown in place of a reply when the completion request fails.
pub const APOLOGY: &str = "很抱歉，我暂时无法回复，请稍后再试。";

/// What happened to a message passed to [`Conversation::send`].
#[derive(Debug)]
pub enum SendOutcome {
    /// Blank input; nothing was sent or recorded.
    Ignored,
    /// The assistant replied with this text.
    Replied(String),
    /// The request failed and the apology was recorded instead.
    Failed(ChatError),
}

/// A chat history bound to one client.
///
/// `send` takes `&mut self`, so a conversation never has more than one
/// request in flight.
pub struct Conversation<C> {
    client: C,
    messages: Vec<ChatMessage>,
}

impl<C: ChatClient> Conversation<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Records `text` as a user turn, sends the whole history and records
    /// the reply (or the apology).
    pub async fn send(
        &mut self,
        text: &str,
    ) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(ChatMessage::user(text));

        match self.client.complete(&self.messages).await {
            Ok(reply) => {
                info!(chars = reply.chars().count(), "assistant replied");
                self.messages.push(ChatMessage::assistant(reply.clone()));
                SendOutcome::Replied(reply)
            }
            Err(error) => {
                warn!(%error, "chat request failed");
                self.messages.push(ChatMessage::assistant(APOLOGY));
                SendOutcome::Failed(error)
            }
        }
    }
}

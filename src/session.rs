//! Chat sessions over a shared FAQ matcher.
//!
//! Conversation history is plain data owned by the caller: a
//! [`ChatHistory`] of `(role, message)` turns that the caller passes into
//! [`ChatSession::ask`]. The session itself holds only the immutable
//! matcher and reply settings, so one session can serve many concurrent
//! conversations.

use std::collections::VecDeque;
use std::sync::Arc;

use matcher::{FaqMatcher, MatchHit, MatchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reply used when no corpus entry is confidently relevant.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I could not find a relevant answer.";

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub message: String,
}

/// Ordered conversation turns, oldest first.
///
/// With a capacity set, the oldest turns are dropped once it is exceeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: VecDeque<ChatTurn>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `capacity` turns. A capacity of zero is
    /// treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            turns: VecDeque::new(),
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn push(&mut self, role: Role, message: impl Into<String>) {
        self.turns.push_back(ChatTurn {
            role,
            message: message.into(),
        });
        if let Some(cap) = self.capacity {
            // Deserialized histories bypass `with_capacity`.
            let cap = cap.max(1);
            while self.turns.len() > cap {
                self.turns.pop_front();
            }
        }
    }

    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.back()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// Reply settings for a [`ChatSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub fallback_message: String,
    /// Capacity for histories created with [`ChatSession::new_history`].
    pub max_history: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            max_history: None,
        }
    }
}

/// The assistant's answer to one question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// Text shown to the user: the matched entry or the fallback message.
    pub message: String,
    pub result: MatchResult,
    /// Most similar entries, best first, for a "similar conversations" list.
    pub related: Vec<MatchHit>,
}

/// Answers questions against a shared matcher.
#[derive(Debug, Clone)]
pub struct ChatSession {
    matcher: Arc<FaqMatcher>,
    config: ChatConfig,
}

impl ChatSession {
    pub fn new(matcher: Arc<FaqMatcher>, config: ChatConfig) -> Self {
        Self { matcher, config }
    }

    pub fn matcher(&self) -> &FaqMatcher {
        &self.matcher
    }

    /// Empty history sized by this session's `max_history`.
    pub fn new_history(&self) -> ChatHistory {
        match self.config.max_history {
            Some(cap) => ChatHistory::with_capacity(cap),
            None => ChatHistory::new(),
        }
    }

    /// Answer `question` and append the exchange to `history`.
    ///
    /// Blank questions get the fallback reply and leave `history` untouched.
    pub fn ask(&self, history: &mut ChatHistory, question: &str) -> ChatReply {
        let question = question.trim();
        if question.is_empty() {
            return ChatReply {
                message: self.config.fallback_message.clone(),
                result: MatchResult::Fallback,
                related: Vec::new(),
            };
        }

        let result = self.matcher.answer(question);
        let related = self.matcher.related(question);
        let message = result.answer_or(&self.config.fallback_message).to_string();

        history.push(Role::User, question);
        history.push(Role::Assistant, message.clone());

        info!(
            matched = result.is_match(),
            score = ?result.score(),
            related = related.len(),
            history_len = history.len(),
            "chat_reply"
        );

        ChatReply {
            message,
            result,
            related,
        }
    }
}

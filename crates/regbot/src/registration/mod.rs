//! Registration form: data model, conversation state machine and delivery
//!
//! - `flow`: the pure transition function over [`FlowState`]
//! - `session`: per-conversation state table
//! - `record` / `forward`: formatting and delivery of completed submissions
//! - `gateway`: the outbound messaging seam

pub mod flow;
pub mod forward;
pub mod gateway;
pub mod keywords;
pub mod record;
pub mod session;
pub mod submission;

pub use flow::{transition, Effect, Event, FlowState, Reply, Transition};
pub use forward::forward_submission;
pub use gateway::Gateway;
pub use keywords::CompletionKeywords;
pub use session::{SessionKey, SessionStore};
pub use submission::{Details, Field, PhotoRef, PhotoSet, Submission, Submitter};

use chrono::Local;
use teloxide::types::ChatId;

use crate::core::config::Config;
use crate::core::error::AppResult;
use crate::telegram::messages;

/// Drives every user's conversation and performs the resulting effects
#[derive(Debug)]
pub struct RegistrationFlow {
    sessions: SessionStore,
    keywords: CompletionKeywords,
    destination: ChatId,
    announce: bool,
}

impl RegistrationFlow {
    pub fn new(destination: ChatId, keywords: CompletionKeywords) -> Self {
        Self {
            sessions: SessionStore::new(),
            keywords,
            destination,
            announce: false,
        }
    }

    /// Post a short notice to the destination before each record
    pub fn with_announcements(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.group_chat_id, config.completion_keywords.clone())
            .with_announcements(config.announce_submissions)
    }

    pub fn destination(&self) -> ChatId {
        self.destination
    }

    pub fn keywords(&self) -> &CompletionKeywords {
        &self.keywords
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handles one inbound event of the conversation `key`.
    ///
    /// The state is advanced first, then effects are executed one by one in
    /// order. A gateway error stops execution and is returned; the state has
    /// already moved on by then.
    pub async fn handle(&self, gateway: &dyn Gateway, key: SessionKey, event: Event) -> AppResult<()> {
        let effects = self.sessions.advance(key, event, &self.keywords);

        for effect in effects {
            match effect {
                Effect::Reply(reply) => {
                    gateway.send_text(key.chat, messages::render(&reply, &self.keywords)).await?;
                }
                Effect::Forward(submission) => {
                    let submitted_at = Local::now().naive_local();
                    forward_submission(gateway, self.destination, &submission, submitted_at, self.announce).await?;
                }
            }
        }

        Ok(())
    }
}

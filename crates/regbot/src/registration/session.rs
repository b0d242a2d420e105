//! In-memory table of active conversations
//!
//! Entries are created by the start command and removed as soon as a flow
//! terminates, so the table only ever holds active states.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use teloxide::types::{ChatId, UserId};

use super::flow::{transition, Effect, Event, FlowState, Transition};
use super::keywords::CompletionKeywords;

/// Identity of one conversation: a user inside a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub chat: ChatId,
    pub user: UserId,
}

impl SessionKey {
    pub fn new(chat: ChatId, user: UserId) -> Self {
        Self { chat, user }
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionKey, FlowState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event` to the conversation identified by `key` and returns the
    /// effects to perform.
    ///
    /// The transition runs while the entry is locked; the lock is released
    /// before this returns, so effects are always executed without it.
    pub fn advance(&self, key: SessionKey, event: Event, keywords: &CompletionKeywords) -> Vec<Effect> {
        match self.sessions.entry(key) {
            Entry::Occupied(mut slot) => {
                let current = std::mem::take(slot.get_mut());
                let Transition { next, effects } = transition(current, event, keywords);
                log::debug!("Session {:?}: -> {}", key, next.name());
                if next.is_active() {
                    *slot.get_mut() = next;
                } else {
                    slot.remove();
                }
                effects
            }
            Entry::Vacant(slot) => {
                let Transition { next, effects } = transition(FlowState::Terminated, event, keywords);
                if next.is_active() {
                    log::debug!("Session {:?}: created in {}", key, next.name());
                    slot.insert(next);
                }
                effects
            }
        }
    }

    /// Snapshot of the conversation's state; `Terminated` when there is none
    pub fn state(&self, key: &SessionKey) -> FlowState {
        self.sessions
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Whether `key` has a form in progress
    pub fn contains(&self, key: &SessionKey) -> bool {
        self.sessions.contains_key(key)
    }

    /// Number of active conversations
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

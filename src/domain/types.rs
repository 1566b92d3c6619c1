//! # Domain Types
//!
//! Common data structures and enums shared by the registry, the dispatcher and
//! the feature modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::traits::ChatProvider;

/// Where an incoming command was sent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// A shared room.
    Public,
    /// A direct-message room.
    Private,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Public => write!(f, "public"),
            Scope::Private => write!(f, "private"),
        }
    }
}

/// Which scopes a registered command answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
    All,
}

impl Visibility {
    /// `All` admits every scope, the others only their own.
    pub fn admits(self, scope: Scope) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Public => scope == Scope::Public,
            Visibility::Private => scope == Scope::Private,
        }
    }
}

/// Everything an action or precondition may know about the triggering message.
#[derive(Clone)]
pub struct MessageContext {
    pub event_id: String,
    pub sender: String,
    pub room_id: String,
    pub body: String,
    /// Reply primitive for the room the message arrived in.
    pub chat: Arc<dyn ChatProvider>,
}

impl MessageContext {
    pub fn new(
        event_id: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
        chat: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            sender: sender.into(),
            room_id: chat.room_id(),
            body: body.into(),
            chat,
        }
    }
}

impl fmt::Debug for MessageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContext")
            .field("event_id", &self.event_id)
            .field("sender", &self.sender)
            .field("room_id", &self.room_id)
            .field("body", &self.body)
            .finish()
    }
}

//! # Domain Traits
//!
//! Abstract interfaces for the chat platform.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;
use std::sync::Arc;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a message threaded as a reply to `event_id`
    async fn reply(&self, event_id: &str, content: &str) -> Result<String, String>;

    /// Send a notification (not tracked)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Resolves room ids to chat handles, for modules that post outside the triggering room.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// `None` when the bot is not in that room or the id is malformed.
    async fn chat_for(&self, room_id: &str) -> Option<Arc<dyn ChatProvider>>;

    /// Invite a user into a room.
    async fn invite(&self, room_id: &str, user_id: &str) -> Result<(), String>;

    /// Whether the user has already joined the room.
    async fn is_joined(&self, room_id: &str, user_id: &str) -> Result<bool, String>;
}

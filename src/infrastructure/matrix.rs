//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` and `RoomDirectory` traits for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the generic interfaces used by the bot's core logic
//! and the specific implementation details of the Matrix SDK.

use crate::domain::traits::{ChatProvider, RoomDirectory};
use crate::domain::types::Scope;
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::relation::InReplyTo;
use matrix_sdk::ruma::events::room::member::MembershipState;
use matrix_sdk::ruma::events::room::message::{Relation, RoomMessageEventContent};
use matrix_sdk::ruma::{EventId, RoomId, UserId};
use std::sync::Arc;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn reply(&self, event_id: &str, content: &str) -> Result<String, String> {
        let event_id = <&EventId>::try_from(event_id).map_err(|e| e.to_string())?;
        let mut message = RoomMessageEventContent::text_markdown(content);
        message.relates_to = Some(Relation::Reply {
            in_reply_to: InReplyTo::new(event_id.to_owned()),
        });

        tracing::info!("Bot replying in {}: {}", self.room_id(), content);
        self.room
            .send(message)
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.room
            .send(RoomMessageEventContent::notice_markdown(content))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Direct-message rooms are private, everything else is public.
pub async fn room_scope(room: &Room) -> Scope {
    match room.is_direct().await {
        Ok(true) => Scope::Private,
        Ok(false) => Scope::Public,
        Err(e) => {
            tracing::warn!(
                "{}",
                crate::strings::logs::scope_lookup_failed(room.room_id().as_str(), &e.to_string())
            );
            Scope::Public
        }
    }
}

/// Looks rooms up through the logged-in client.
#[derive(Clone)]
pub struct MatrixDirectory {
    client: Client,
}

impl MatrixDirectory {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn room(&self, room_id: &str) -> Result<Room, String> {
        let id = <&RoomId>::try_from(room_id).map_err(|e| e.to_string())?;
        self.client
            .get_room(id)
            .ok_or_else(|| format!("not joined to {room_id}"))
    }
}

#[async_trait]
impl RoomDirectory for MatrixDirectory {
    async fn chat_for(&self, room_id: &str) -> Option<Arc<dyn ChatProvider>> {
        let room = self.room(room_id).ok()?;
        Some(Arc::new(MatrixService::new(room)))
    }

    async fn invite(&self, room_id: &str, user_id: &str) -> Result<(), String> {
        let room = self.room(room_id)?;
        let user_id = <&UserId>::try_from(user_id).map_err(|e| e.to_string())?;
        room.invite_user_by_id(user_id)
            .await
            .map_err(|e| e.to_string())
    }

    async fn is_joined(&self, room_id: &str, user_id: &str) -> Result<bool, String> {
        let room = self.room(room_id)?;
        let user_id = <&UserId>::try_from(user_id).map_err(|e| e.to_string())?;
        let member = room
            .get_member_no_sync(user_id)
            .await
            .map_err(|e| e.to_string())?;
        Ok(member.is_some_and(|m| *m.membership() == MembershipState::Join))
    }
}

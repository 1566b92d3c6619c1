//! Test doubles for the chat platform.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::traits::{ChatProvider, RoomDirectory};
use crate::domain::types::MessageContext;

/// Records everything the bot would have sent.
#[derive(Default)]
pub struct RecordingChat {
    pub room_id: String,
    pub sent: Mutex<Vec<String>>,
    /// (in_reply_to, content)
    pub replies: Mutex<Vec<(String, String)>>,
    pub fail_sends: bool,
}

impl RecordingChat {
    pub fn new(room_id: &str) -> Arc<Self> {
        Arc::new(Self {
            room_id: room_id.to_string(),
            ..Default::default()
        })
    }

    pub fn failing(room_id: &str) -> Arc<Self> {
        Arc::new(Self {
            room_id: room_id.to_string(),
            fail_sends: true,
            ..Default::default()
        })
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<(String, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        if self.fail_sends {
            return Err("send refused".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$sent{}", sent.len()))
    }

    async fn reply(&self, event_id: &str, content: &str) -> Result<String, String> {
        if self.fail_sends {
            return Err("send refused".to_string());
        }
        let mut replies = self.replies.lock().unwrap();
        replies.push((event_id.to_string(), content.to_string()));
        Ok(format!("$reply{}", replies.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.send_message(content).await.map(|_| ())
    }

    fn room_id(&self) -> String {
        self.room_id.clone()
    }
}

/// Recording chat whose replies take `delay` to reach the server.
pub struct SlowChat {
    pub inner: Arc<RecordingChat>,
    pub delay: Duration,
}

impl SlowChat {
    pub fn new(room_id: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner: RecordingChat::new(room_id),
            delay,
        })
    }
}

#[async_trait]
impl ChatProvider for SlowChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        tokio::time::sleep(self.delay).await;
        self.inner.send_message(content).await
    }

    async fn reply(&self, event_id: &str, content: &str) -> Result<String, String> {
        tokio::time::sleep(self.delay).await;
        self.inner.reply(event_id, content).await
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.send_message(content).await.map(|_| ())
    }

    fn room_id(&self) -> String {
        self.inner.room_id()
    }
}

/// Context for a message from `@alice:example.org`.
pub fn context(chat: Arc<RecordingChat>, body: &str) -> MessageContext {
    context_from(chat, "@alice:example.org", body)
}

pub fn context_from(chat: Arc<RecordingChat>, sender: &str, body: &str) -> MessageContext {
    MessageContext::new("$trigger", sender, body, chat)
}

/// In-memory room directory.
#[derive(Default)]
pub struct FakeDirectory {
    pub rooms: HashMap<String, Arc<RecordingChat>>,
    pub joined: Mutex<HashSet<(String, String)>>,
    pub invites: Mutex<Vec<(String, String)>>,
    pub refuse_invites: bool,
    pub fail_lookups: bool,
}

impl FakeDirectory {
    pub fn with_room(mut self, chat: Arc<RecordingChat>) -> Self {
        self.rooms.insert(chat.room_id.clone(), chat);
        self
    }

    pub fn join(&self, room_id: &str, user_id: &str) {
        self.joined
            .lock()
            .unwrap()
            .insert((room_id.to_string(), user_id.to_string()));
    }

    pub fn invites(&self) -> Vec<(String, String)> {
        self.invites.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoomDirectory for FakeDirectory {
    async fn chat_for(&self, room_id: &str) -> Option<Arc<dyn ChatProvider>> {
        self.rooms
            .get(room_id)
            .map(|chat| chat.clone() as Arc<dyn ChatProvider>)
    }

    async fn invite(&self, room_id: &str, user_id: &str) -> Result<(), String> {
        if self.refuse_invites {
            return Err("M_FORBIDDEN".to_string());
        }
        self.invites
            .lock()
            .unwrap()
            .push((room_id.to_string(), user_id.to_string()));
        Ok(())
    }

    async fn is_joined(&self, room_id: &str, user_id: &str) -> Result<bool, String> {
        if self.fail_lookups {
            return Err("M_UNKNOWN".to_string());
        }
        Ok(self
            .joined
            .lock()
            .unwrap()
            .contains(&(room_id.to_string(), user_id.to_string())))
    }
}

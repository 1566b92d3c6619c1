//! # Admin Commands
//!
//! `shutdown` (owners) and `say` (admins, direct messages only).

use anyhow::Result;
use futures::FutureExt;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::application::guard::Guard;
use crate::application::registry::CommandRegistry;
use crate::application::startup::FeatureModule;
use crate::domain::traits::RoomDirectory;
use crate::domain::types::{MessageContext, Visibility};
use crate::strings::{logs, messages};

pub struct AdminCommands {
    guard: Arc<Guard>,
    directory: Arc<dyn RoomDirectory>,
    shutdown: Arc<Notify>,
}

impl AdminCommands {
    pub fn new(guard: Arc<Guard>, directory: Arc<dyn RoomDirectory>, shutdown: Arc<Notify>) -> Self {
        Self {
            guard,
            directory,
            shutdown,
        }
    }
}

impl FeatureModule for AdminCommands {
    fn name(&self) -> &'static str {
        "admin"
    }

    fn startup(&self, registry: &mut CommandRegistry) {
        let shutdown = self.shutdown.clone();
        registry.register(
            "shutdown",
            move |ctx, args| handle_shutdown(shutdown.clone(), ctx, args).boxed(),
            Visibility::All,
            Some(self.guard.owner()),
        );

        let directory = self.directory.clone();
        registry.register(
            "say",
            move |ctx, args| handle_say(directory.clone(), ctx, args).boxed(),
            Visibility::Private,
            Some(self.guard.admin()),
        );
    }
}

/// Sends the farewell before signalling: `main` exits as soon as it is notified.
pub async fn handle_shutdown(
    shutdown: Arc<Notify>,
    ctx: &MessageContext,
    _args: &[String],
) -> Result<Option<String>> {
    tracing::info!("{}", logs::SHUTDOWN_REQUESTED);
    if let Err(e) = ctx.chat.reply(&ctx.event_id, messages::FAREWELL).await {
        tracing::warn!("{}", logs::reply_failed(&e));
    }
    shutdown.notify_one();
    Ok(None)
}

/// `say <room_id> <message...>`: posts into another room the bot has joined.
pub async fn handle_say(
    directory: Arc<dyn RoomDirectory>,
    _ctx: &MessageContext,
    args: &[String],
) -> Result<Option<String>> {
    let [room_id, words @ ..] = args else {
        return Ok(Some(messages::SAY_USAGE.to_string()));
    };
    if words.is_empty() {
        return Ok(Some(messages::SAY_USAGE.to_string()));
    }

    let Some(chat) = directory.chat_for(room_id).await else {
        return Ok(Some(messages::unknown_room(room_id)));
    };

    match chat.send_message(&words.join(" ")).await {
        Ok(_) => Ok(None),
        Err(e) => Ok(Some(messages::send_failed(&e))),
    }
}

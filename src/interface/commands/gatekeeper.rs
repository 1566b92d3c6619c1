//! # Gatekeeper
//!
//! Owns no commands. Watches for the configured reaction on the rules message
//! and invites the reacting user into the members room. When the invite fails
//! the bot-log room is asked to do it by hand.

use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::application::startup::FeatureModule;
use crate::domain::config::GatekeeperConfig;
use crate::domain::traits::RoomDirectory;
use crate::strings::{logs, messages};

pub struct Gatekeeper {
    config: GatekeeperConfig,
    log_room: Option<String>,
    directory: Arc<dyn RoomDirectory>,
}

impl Gatekeeper {
    pub fn new(
        config: GatekeeperConfig,
        log_room: Option<String>,
        directory: Arc<dyn RoomDirectory>,
    ) -> Self {
        Self {
            config,
            log_room,
            directory,
        }
    }

    /// Reports missing configuration. Returns whether reactions are handled at all.
    pub fn setup(&self) -> bool {
        if self.log_room.is_none() {
            tracing::warn!("{}", logs::NO_LOG_ROOM);
        }
        if self.config.members_room.is_none() {
            tracing::warn!("{}", logs::NO_MEMBERS_ROOM);
        }
        if self.config.rules_event.is_none() {
            tracing::warn!("{}", logs::NO_RULES_EVENT);
        }
        self.enabled()
    }

    pub fn enabled(&self) -> bool {
        self.config.rules_event.is_some() && self.config.members_room.is_some()
    }

    /// Only the configured emoji on the rules message counts.
    pub fn wants_grant(&self, key: &str, target_event: &str) -> bool {
        key == self.config.emoji && self.config.rules_event.as_deref() == Some(target_event)
    }

    pub async fn check_reaction(&self, user_id: &str, key: &str, target_event: &str) {
        if !self.wants_grant(key, target_event) {
            return;
        }
        let Some(members_room) = self.config.members_room.as_deref() else {
            return;
        };

        match self.directory.is_joined(members_room, user_id).await {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => tracing::warn!("{}", logs::membership_lookup_failed(user_id, &e)),
        }

        if let Err(e) = self.directory.invite(members_room, user_id).await {
            tracing::warn!("{}", logs::grant_failed(user_id, &e));
            self.notify_log_room(&messages::grant_failed_notice(user_id)).await;
        }
    }

    async fn notify_log_room(&self, content: &str) {
        let Some(room) = self.log_room.as_deref() else {
            return;
        };
        match self.directory.chat_for(room).await {
            Some(chat) => {
                if let Err(e) = chat.send_notification(content).await {
                    tracing::warn!("{}", logs::reply_failed(&e));
                }
            }
            None => tracing::warn!("{}", logs::NO_LOG_ROOM),
        }
    }
}

impl FeatureModule for Gatekeeper {
    fn name(&self) -> &'static str {
        "gatekeeper"
    }

    fn startup(&self, _registry: &mut CommandRegistry) {
        tracing::info!("{}", logs::REGISTERED_NO_COMMANDS);
    }
}

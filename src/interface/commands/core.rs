//! # Core Commands
//!
//! `ping`, `help` and `rules`: the commands every user can reach.

use anyhow::Result;
use futures::FutureExt;

use crate::application::registry::CommandRegistry;
use crate::application::startup::FeatureModule;
use crate::domain::types::{MessageContext, Visibility};
use crate::strings::{help, messages};

pub struct CoreCommands {
    prefix: String,
    rules_room: Option<String>,
}

impl CoreCommands {
    pub fn new(prefix: impl Into<String>, rules_room: Option<String>) -> Self {
        Self {
            prefix: prefix.into(),
            rules_room,
        }
    }
}

impl FeatureModule for CoreCommands {
    fn name(&self) -> &'static str {
        "core"
    }

    fn startup(&self, registry: &mut CommandRegistry) {
        registry.register("ping", |ctx, args| handle_ping(ctx, args).boxed(), Visibility::All, None);

        let help = help::main(&self.prefix);
        registry.register(
            "help",
            move |ctx, args| handle_help(help.clone(), ctx, args).boxed(),
            Visibility::All,
            None,
        );

        let rules = rules_reply(self.rules_room.as_deref());
        registry.register(
            "rules",
            move |_ctx, _args| {
                let rules = rules.clone();
                async move { Ok(Some(rules)) }.boxed()
            },
            Visibility::Public,
            None,
        );
    }
}

pub async fn handle_ping(_ctx: &MessageContext, _args: &[String]) -> Result<Option<String>> {
    Ok(Some(messages::PONG.to_string()))
}

pub async fn handle_help(text: String, _ctx: &MessageContext, _args: &[String]) -> Result<Option<String>> {
    Ok(Some(text))
}

fn rules_reply(rules_room: Option<&str>) -> String {
    match rules_room {
        Some(room) => messages::rules_pointer(room),
        None => messages::NO_RULES_ROOM.to_string(),
    }
}

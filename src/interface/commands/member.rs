//! # Member Commands
//!
//! Handles `whoami`.

use futures::FutureExt;
use std::sync::Arc;

use crate::application::guard::Guard;
use crate::application::registry::CommandRegistry;
use crate::application::startup::FeatureModule;
use crate::domain::types::Visibility;
use crate::strings::messages;

pub struct MemberCommands {
    guard: Arc<Guard>,
}

impl MemberCommands {
    pub fn new(guard: Arc<Guard>) -> Self {
        Self { guard }
    }
}

impl FeatureModule for MemberCommands {
    fn name(&self) -> &'static str {
        "member"
    }

    fn startup(&self, registry: &mut CommandRegistry) {
        let guard = self.guard.clone();
        registry.register(
            "whoami",
            move |ctx, _args| {
                let level = guard.level(&ctx.sender);
                let reply = messages::whoami(&ctx.sender, &level.to_string());
                async move { Ok(Some(reply)) }.boxed()
            },
            Visibility::All,
            None,
        );
    }
}

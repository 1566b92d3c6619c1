//! # Dispatcher
//!
//! Resolves a trigger against the frozen registry, checks the command's
//! precondition and runs its action, replying with whatever text it returns.

use anyhow::Result;
use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::domain::types::{MessageContext, Scope};
use crate::strings::logs;

pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Returns `Ok(true)` when the trigger is known in `scope`, whether or not
    /// the precondition let the action run. Action errors are returned as-is.
    pub async fn dispatch(
        &self,
        trigger: &str,
        ctx: &MessageContext,
        args: &[String],
        scope: Scope,
    ) -> Result<bool> {
        tracing::info!("{}", logs::lookup(trigger, &scope.to_string()));

        let Some(command) = self.registry.lookup(trigger, scope) else {
            tracing::debug!("{}", logs::COMMAND_NOT_FOUND);
            return Ok(false);
        };

        tracing::info!("{}", logs::COMMAND_FOUND);

        if !command.allows(ctx) {
            tracing::debug!("{}", logs::precondition_denied(trigger, &ctx.sender));
            return Ok(true);
        }

        let reply = (command.action)(ctx, args).await?;

        if let Some(text) = reply.filter(|text| !text.is_empty())
            && let Err(e) = ctx.chat.reply(&ctx.event_id, &text).await
        {
            tracing::warn!("{}", logs::reply_failed(&e));
        }

        Ok(true)
    }
}

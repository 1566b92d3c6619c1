//! # Command Router
//!
//! Sits between the Matrix event handler and the dispatcher: strips the
//! command prefix, splits the arguments and forwards the trigger with the
//! scope of the room it arrived in.

use anyhow::Result;
use std::sync::Arc;

use crate::application::dispatcher::Dispatcher;
use crate::application::parsing::parse_command;
use crate::domain::types::{MessageContext, Scope};

pub struct CommandRouter {
    dispatcher: Arc<Dispatcher>,
    prefix: String,
}

impl CommandRouter {
    pub fn new(dispatcher: Arc<Dispatcher>, prefix: impl Into<String>) -> Self {
        Self {
            dispatcher,
            prefix: prefix.into(),
        }
    }

    /// `Ok(false)` for plain chatter and for triggers unknown in `scope`.
    pub async fn route(&self, ctx: &MessageContext, scope: Scope) -> Result<bool> {
        let Some(command) = parse_command(&ctx.body, &self.prefix) else {
            return Ok(false);
        };

        tracing::info!(
            "Router dispatching cmd='{}' args={:?} sender='{}' scope={}",
            command.trigger,
            command.args,
            ctx.sender,
            scope
        );

        self.dispatcher
            .dispatch(&command.trigger, ctx, &command.args, scope)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::CommandRegistry;
    use crate::application::test_support::{RecordingChat, context};
    use crate::domain::types::Visibility;
    use futures::FutureExt;

    fn router() -> CommandRouter {
        let mut registry = CommandRegistry::new();
        registry.register(
            "echo",
            |_ctx, args| async move { Ok(Some(args.join("|"))) }.boxed(),
            Visibility::All,
            None,
        );
        registry.register(
            "dm",
            |_ctx, _args| async { Ok(Some("psst".to_string())) }.boxed(),
            Visibility::Private,
            None,
        );
        CommandRouter::new(Arc::new(Dispatcher::new(Arc::new(registry))), "!")
    }

    #[tokio::test]
    async fn test_routes_prefixed_command() {
        let chat = RecordingChat::new("!room:example.org");
        let ctx = context(chat.clone(), r#"!echo one "two three""#);

        assert!(router().route(&ctx, Scope::Public).await.unwrap());
        assert_eq!(chat.replies()[0].1, "one|two three");
    }

    #[tokio::test]
    async fn test_ignores_plain_text() {
        let chat = RecordingChat::new("!room:example.org");
        let ctx = context(chat.clone(), "echo not a command");

        assert!(!router().route(&ctx, Scope::Public).await.unwrap());
        assert!(chat.replies().is_empty());
    }

    #[tokio::test]
    async fn test_scope_is_forwarded() {
        let router = router();
        let chat = RecordingChat::new("!room:example.org");
        let ctx = context(chat.clone(), "!dm");

        assert!(!router.route(&ctx, Scope::Public).await.unwrap());
        assert!(router.route(&ctx, Scope::Private).await.unwrap());
        assert_eq!(chat.replies().len(), 1);
    }
}

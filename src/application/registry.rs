//! # Command Registry
//!
//! Holds every command contributed by the feature modules. Filled once during
//! startup, then frozen behind an `Arc` and only ever read by the dispatcher.

use anyhow::Result;
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::domain::types::{MessageContext, Scope, Visibility};

/// Outcome of an action: `Some(text)` is sent back as a reply.
pub type ActionFuture<'a> = BoxFuture<'a, Result<Option<String>>>;

pub type Action =
    Box<dyn for<'a> Fn(&'a MessageContext, &'a [String]) -> ActionFuture<'a> + Send + Sync>;

/// Gate evaluated before an action runs. Must not have side effects.
pub type Precondition = Arc<dyn Fn(&MessageContext) -> bool + Send + Sync>;

pub struct CommandDefinition {
    pub trigger: String,
    pub action: Action,
    pub visibility: Visibility,
    pub precondition: Option<Precondition>,
}

impl CommandDefinition {
    /// A missing precondition always passes.
    pub fn allows(&self, ctx: &MessageContext) -> bool {
        self.precondition.as_ref().is_none_or(|check| check(ctx))
    }
}

impl std::fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("trigger", &self.trigger)
            .field("visibility", &self.visibility)
            .field("precondition", &self.precondition.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command. The first registration of a trigger wins; later ones
    /// are logged and dropped, as are blank or multi-word triggers.
    pub fn register<F>(
        &mut self,
        trigger: &str,
        action: F,
        visibility: Visibility,
        precondition: Option<Precondition>,
    ) where
        F: for<'a> Fn(&'a MessageContext, &'a [String]) -> ActionFuture<'a> + Send + Sync + 'static,
    {
        if trigger.is_empty() || trigger.contains(char::is_whitespace) {
            tracing::error!("{}", crate::strings::logs::invalid_trigger(trigger));
            return;
        }
        if self.contains(trigger) {
            tracing::error!("{}", crate::strings::logs::duplicate_trigger(trigger));
            return;
        }

        self.definitions.push(CommandDefinition {
            trigger: trigger.to_string(),
            action: Box::new(action),
            visibility,
            precondition,
        });
    }

    /// First definition with this exact trigger that is visible in `scope`.
    pub fn lookup(&self, trigger: &str, scope: Scope) -> Option<&CommandDefinition> {
        self.definitions
            .iter()
            .find(|def| def.trigger == trigger && def.visibility.admits(scope))
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.definitions.iter().any(|def| def.trigger == trigger)
    }

    /// Registered definitions in insertion order.
    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

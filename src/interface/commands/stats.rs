//! # Stats Commands
//!
//! Handles `uptime` (moderators).

use chrono::{DateTime, TimeDelta, Utc};
use futures::FutureExt;
use std::sync::Arc;

use crate::application::guard::Guard;
use crate::application::registry::CommandRegistry;
use crate::application::startup::FeatureModule;
use crate::domain::types::Visibility;
use crate::strings::messages;

pub struct StatsCommands {
    guard: Arc<Guard>,
    started: DateTime<Utc>,
}

impl StatsCommands {
    pub fn new(guard: Arc<Guard>, started: DateTime<Utc>) -> Self {
        Self { guard, started }
    }
}

impl FeatureModule for StatsCommands {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn startup(&self, registry: &mut CommandRegistry) {
        let started = self.started;
        registry.register(
            "uptime",
            move |_ctx, _args| {
                let reply = format_uptime(Utc::now() - started);
                async move { Ok(Some(reply)) }.boxed()
            },
            Visibility::All,
            Some(self.guard.moderator()),
        );
    }
}

fn format_uptime(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    messages::uptime(
        total / 86_400,
        (total % 86_400) / 3_600,
        (total % 3_600) / 60,
        total % 60,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatcher::Dispatcher;
    use crate::application::startup::register_all;
    use crate::application::test_support::{RecordingChat, context_from};
    use crate::domain::config::SystemConfig;
    use crate::domain::types::Scope;

    #[test]
    fn test_format_uptime() {
        let elapsed = TimeDelta::seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(format_uptime(elapsed), messages::uptime(2, 3, 4, 5));
        assert_eq!(format_uptime(TimeDelta::seconds(-3)), messages::uptime(0, 0, 0, 0));
    }

    #[tokio::test]
    async fn test_uptime_needs_moderator() {
        let guard = Arc::new(Guard::new(&SystemConfig {
            moderators: vec!["@mod:example.org".to_string()],
            ..Default::default()
        }));
        let started = Utc::now() - TimeDelta::hours(1);
        let module: Arc<dyn FeatureModule> = Arc::new(StatsCommands::new(guard, started));
        let dispatcher = Dispatcher::new(register_all(&[module]));
        let chat = RecordingChat::new("!room:example.org");

        let ctx = context_from(chat.clone(), "@pleb:example.org", "!uptime");
        assert!(dispatcher.dispatch("uptime", &ctx, &[], Scope::Public).await.unwrap());
        assert!(chat.replies().is_empty());

        let ctx = context_from(chat.clone(), "@mod:example.org", "!uptime");
        assert!(dispatcher.dispatch("uptime", &ctx, &[], Scope::Public).await.unwrap());
        assert!(chat.replies()[0].1.starts_with("⏱️ Up for 0d 1h"));
    }
}

//! # Guard
//!
//! Permission predicates used as command preconditions. Access levels come
//! from the `system` section of the config; user ids compare case-insensitively.

use std::fmt;
use std::sync::Arc;

use crate::application::registry::Precondition;
use crate::domain::config::SystemConfig;
use crate::domain::types::MessageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    Member,
    Moderator,
    Admin,
    Owner,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessLevel::Member => "member",
            AccessLevel::Moderator => "moderator",
            AccessLevel::Admin => "admin",
            AccessLevel::Owner => "owner",
        };
        f.write_str(name)
    }
}

fn normalize(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| id.to_lowercase()).collect()
}

#[derive(Debug, Default)]
pub struct Guard {
    owners: Vec<String>,
    admins: Vec<String>,
    moderators: Vec<String>,
}

impl Guard {
    pub fn new(system: &SystemConfig) -> Self {
        Self {
            owners: normalize(&system.owners),
            admins: normalize(&system.admins),
            moderators: normalize(&system.moderators),
        }
    }

    pub fn level(&self, user: &str) -> AccessLevel {
        let user = user.to_lowercase();
        if self.owners.contains(&user) {
            AccessLevel::Owner
        } else if self.admins.contains(&user) {
            AccessLevel::Admin
        } else if self.moderators.contains(&user) {
            AccessLevel::Moderator
        } else {
            AccessLevel::Member
        }
    }

    pub fn is_owner(&self, user: &str) -> bool {
        self.level(user) >= AccessLevel::Owner
    }

    pub fn is_admin(&self, user: &str) -> bool {
        self.level(user) >= AccessLevel::Admin
    }

    pub fn is_mod(&self, user: &str) -> bool {
        self.level(user) >= AccessLevel::Moderator
    }

    pub fn owner(self: &Arc<Self>) -> Precondition {
        let guard = Arc::clone(self);
        Arc::new(move |ctx: &MessageContext| guard.is_owner(&ctx.sender))
    }

    pub fn admin(self: &Arc<Self>) -> Precondition {
        let guard = Arc::clone(self);
        Arc::new(move |ctx: &MessageContext| guard.is_admin(&ctx.sender))
    }

    pub fn moderator(self: &Arc<Self>) -> Precondition {
        let guard = Arc::clone(self);
        Arc::new(move |ctx: &MessageContext| guard.is_mod(&ctx.sender))
    }
}

//! # Application Layer
//!
//! Contains the core logic of the bot: the command registry, the startup
//! registration phase, permission guards, parsing, routing and dispatch.

pub mod dispatcher;
pub mod guard;
pub mod parsing;
pub mod registry;
pub mod router;
pub mod startup;

#[cfg(test)]
pub mod test_support;

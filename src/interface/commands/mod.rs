//! # Command Modules
//!
//! One feature module per file. Each registers its commands once at startup.

pub mod admin;
pub mod core;
pub mod gatekeeper;
pub mod member;
pub mod stats;

//! # Strings Module
//!
//! Centralizes user-facing strings, log lines, and help text.

pub mod help;
pub mod logs;
pub mod messages;

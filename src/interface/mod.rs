//! # Interface Layer
//!
//! The feature modules that contribute commands to the registry.

pub mod commands;

//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.

pub const PONG: &str = "pong";
pub const NO_RULES_ROOM: &str = "No rules room has been configured.";

pub fn rules_pointer(room: &str) -> String {
    format!("Please read the rules in {room} and give them a 👍 to get access.")
}

pub const FAREWELL: &str = "👋 Shutting down. Bye!";
pub const SAY_USAGE: &str = "Usage: `say <room_id> <message>`";

pub fn unknown_room(room: &str) -> String {
    format!("I'm not in `{room}`.")
}

pub fn send_failed(err: &str) -> String {
    format!("Failed to send: {err}")
}

pub fn whoami(user: &str, level: &str) -> String {
    format!("**User**: {user}\n**Access**: {level}")
}

pub fn uptime(days: i64, hours: i64, minutes: i64, seconds: i64) -> String {
    format!("⏱️ Up for {days}d {hours}h {minutes}m {seconds}s")
}

pub fn grant_failed_notice(user: &str) -> String {
    format!(
        "{user} gave the rules a thumbs-up, but I couldn't invite them into the members room. Please invite them manually."
    )
}

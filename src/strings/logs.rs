pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub fn config_read_error(path: &str) -> String {
    format!("Failed to read {path}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const STARTING: &str = "Starting Swampkeeper...";
pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";
pub const SHUTDOWN_REQUESTED: &str = "Shutdown requested by command.";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub const JOIN_INVITE_SUCCESS: &str = "✅ Successfully joined room!";

// Registry / dispatch

pub fn duplicate_trigger(trigger: &str) -> String {
    format!("Attempted to register a command for trigger \"{trigger}\" but one already exists!")
}

pub fn invalid_trigger(trigger: &str) -> String {
    format!("Refusing to register a command for trigger \"{trigger}\": it must be a single non-empty word")
}

pub fn registered_command(trigger: &str, visibility: &str, guarded: bool) -> String {
    format!("Command registered: trigger=\"{trigger}\" visibility={visibility} guarded={guarded}")
}

pub const EMPTY_REGISTRY: &str = "No commands were registered; the bot will ignore all messages.";

pub fn registration_complete(total: usize) -> String {
    format!("Command registration complete. Total commands: {total}")
}

pub fn module_startup(name: &str) -> String {
    format!("Registering commands for module [{name}]...")
}

pub const REGISTERED_NO_COMMANDS: &str = "Registered no commands.";

pub fn lookup(trigger: &str, scope: &str) -> String {
    format!("Attempting to find handler for command \"{trigger}\" ({scope})...")
}

pub const COMMAND_NOT_FOUND: &str = "Command not found.";
pub const COMMAND_FOUND: &str = "Command found! Executing...";

pub fn precondition_denied(trigger: &str, sender: &str) -> String {
    format!("Precondition for \"{trigger}\" not met by {sender}")
}

pub fn reply_failed(err: &str) -> String {
    format!("Failed to send reply: {err}")
}

pub fn route_failed(err: &str) -> String {
    format!("Failed to route message: {err}")
}

pub fn scope_lookup_failed(room_id: &str, err: &str) -> String {
    format!("Could not determine whether {room_id} is direct, treating as public: {err}")
}

// Gatekeeper

pub const NO_RULES_EVENT: &str = "Couldn't find a rules message.";
pub const NO_MEMBERS_ROOM: &str = "Couldn't find a members room.";
pub const NO_LOG_ROOM: &str = "Couldn't find a bot log room.";

pub fn membership_lookup_failed(user: &str, err: &str) -> String {
    format!("Could not check whether {user} is in the members room, inviting anyway: {err}")
}

pub fn grant_failed(user: &str, err: &str) -> String {
    format!("Failed to invite {user} into the members room: {err}")
}

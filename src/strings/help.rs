//! # Help Text
//!
//! Displayed to the user via the `help` command.

/// Help for a bot answering to `prefix`.
pub fn main(prefix: &str) -> String {
    format!(
        concat!(
            "**🐊 Swampkeeper Help**\n",
            "Use: {p}command _args_\n",
            "\n",
            "**⚡ Everyone**\n",
            "* {p}ping\n",
            "* {p}help\n",
            "* {p}rules\n",
            "* {p}whoami\n",
            "\n",
            "**🛡️ Moderators**\n",
            "* {p}uptime\n",
            "\n",
            "**🔑 Admins** (direct message)\n",
            "* {p}say [room] [msg]\n",
            "\n",
            "**👑 Owners**\n",
            "* {p}shutdown\n"
        ),
        p = prefix
    )
}

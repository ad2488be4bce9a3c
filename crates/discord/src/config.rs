//! Discord client configuration.

use secrecy::Secret;

/// Settings for the Discord connection and command handling.
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token.
    pub token: Secret<String>,

    /// Prefix that marks a message as a command.
    pub command_prefix: String,

    /// Role required for the channel management commands.
    pub admin_role: String,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"[REDACTED]")
            .field("command_prefix", &self.command_prefix)
            .field("admin_role", &self.admin_role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let cfg = DiscordConfig {
            token: Secret::new("very-secret".into()),
            command_prefix: "!".into(),
            admin_role: "bot_config".into(),
        };
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("very-secret"));
    }
}

//! Channel management commands.
//!
//! Parsing and execution are kept free of serenity types so the command
//! behavior is testable without a gateway connection.

use dolmetscher_channels::ChannelRegistry;

/// A recognized command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Register the current channel for replies.
    SetChannel,
    /// Deregister the current channel.
    ClearChannel,
}

impl Command {
    /// Parse a message as a command invocation.
    ///
    /// The first whitespace token after the prefix must be a known command
    /// name; anything else is a plain message. Trailing text is ignored,
    /// the commands take no arguments.
    #[must_use]
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let rest = content.strip_prefix(prefix)?;
        match rest.split_whitespace().next()? {
            "setchannel" => Some(Self::SetChannel),
            "clearchannel" => Some(Self::ClearChannel),
            _ => None,
        }
    }
}

/// Outcome of a command, mapped 1:1 to a reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandReply {
    Registered,
    AlreadyRegistered,
    Removed,
    NotRegistered,
    InsufficientPermission,
}

impl CommandReply {
    /// The reply sent back to the invoking channel.
    #[must_use]
    pub fn text(&self) -> &'static str {
        match self {
            Self::Registered => "From now on I will reply in this channel.",
            Self::AlreadyRegistered => "This channel is already registered.",
            Self::Removed => "This channel has been removed.",
            Self::NotRegistered => "This channel is not registered.",
            Self::InsufficientPermission => {
                "You do not have the role required for this command."
            },
        }
    }
}

/// Execute a command against the registry.
///
/// The role check short-circuits before any registry mutation; the registry
/// persists to disk before the reply is produced.
pub async fn execute(
    command: Command,
    registry: &ChannelRegistry,
    channel: u64,
    has_admin_role: bool,
) -> dolmetscher_channels::Result<CommandReply> {
    if !has_admin_role {
        return Ok(CommandReply::InsufficientPermission);
    }

    let reply = match command {
        Command::SetChannel => {
            if registry.register(channel).await? {
                CommandReply::Registered
            } else {
                CommandReply::AlreadyRegistered
            }
        },
        Command::ClearChannel => {
            if registry.deregister(channel).await? {
                CommandReply::Removed
            } else {
                CommandReply::NotRegistered
            }
        },
    };
    Ok(reply)
}

/// Guidance reply for messages outside registered channels, listing the
/// mention form of every channel that still resolves. An empty list still
/// yields the guidance text.
#[must_use]
pub fn guidance_text(mentions: &[String]) -> String {
    format!(
        "Sorry, I cannot reply here. Please use one of these channels: {}",
        mentions.join(", ")
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, dolmetscher_channels::FileStore, std::path::Path, tempfile::TempDir};

    fn make_registry(dir: &Path) -> ChannelRegistry {
        ChannelRegistry::new(FileStore::new(dir.join("channels.json")))
    }

    #[test]
    fn parse_known_commands() {
        assert_eq!(Command::parse("!setchannel", "!"), Some(Command::SetChannel));
        assert_eq!(
            Command::parse("!clearchannel", "!"),
            Some(Command::ClearChannel)
        );
    }

    #[test]
    fn parse_ignores_trailing_text() {
        assert_eq!(
            Command::parse("!setchannel please", "!"),
            Some(Command::SetChannel)
        );
    }

    #[test]
    fn parse_rejects_plain_messages_and_unknown_commands() {
        assert_eq!(Command::parse("hello there", "!"), None);
        assert_eq!(Command::parse("!dance", "!"), None);
        assert_eq!(Command::parse("!setchannelx", "!"), None);
        assert_eq!(Command::parse("setchannel", "!"), None);
        assert_eq!(Command::parse("!", "!"), None);
    }

    #[tokio::test]
    async fn set_then_set_then_clear() {
        let tmp = TempDir::new().unwrap();
        let registry = make_registry(tmp.path());

        let reply = execute(Command::SetChannel, &registry, 7, true).await.unwrap();
        assert_eq!(reply, CommandReply::Registered);
        assert_eq!(registry.list().await, vec![7]);

        let reply = execute(Command::SetChannel, &registry, 7, true).await.unwrap();
        assert_eq!(reply, CommandReply::AlreadyRegistered);
        assert_eq!(registry.list().await, vec![7]);

        let reply = execute(Command::ClearChannel, &registry, 7, true)
            .await
            .unwrap();
        assert_eq!(reply, CommandReply::Removed);
        assert!(registry.list().await.is_empty());
    }

    #[tokio::test]
    async fn clear_unregistered_channel() {
        let tmp = TempDir::new().unwrap();
        let registry = make_registry(tmp.path());

        let reply = execute(Command::ClearChannel, &registry, 7, true)
            .await
            .unwrap();
        assert_eq!(reply, CommandReply::NotRegistered);
    }

    #[tokio::test]
    async fn missing_role_never_mutates() {
        let tmp = TempDir::new().unwrap();
        let registry = make_registry(tmp.path());

        let reply = execute(Command::SetChannel, &registry, 7, false)
            .await
            .unwrap();
        assert_eq!(reply, CommandReply::InsufficientPermission);
        assert!(registry.list().await.is_empty());

        registry.register(7).await.unwrap();
        let reply = execute(Command::ClearChannel, &registry, 7, false)
            .await
            .unwrap();
        assert_eq!(reply, CommandReply::InsufficientPermission);
        assert_eq!(registry.list().await, vec![7]);
    }

    #[test]
    fn reply_texts_are_distinct() {
        let replies = [
            CommandReply::Registered,
            CommandReply::AlreadyRegistered,
            CommandReply::Removed,
            CommandReply::NotRegistered,
            CommandReply::InsufficientPermission,
        ];
        for (i, a) in replies.iter().enumerate() {
            for b in &replies[i + 1..] {
                assert_ne!(a.text(), b.text());
            }
        }
    }

    #[test]
    fn guidance_lists_channels() {
        let text = guidance_text(&["<#1>".into(), "<#2>".into()]);
        assert!(text.contains("<#1>, <#2>"));
    }

    #[test]
    fn guidance_with_no_channels_is_still_sent() {
        let text = guidance_text(&[]);
        assert!(text.starts_with("Sorry, I cannot reply here"));
    }
}

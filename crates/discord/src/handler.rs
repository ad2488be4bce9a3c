//! Discord event handler for serenity.
//!
//! Routes every inbound message through the decision ladder described in
//! the crate docs. Nothing that fails while handling one message may
//! affect any other message or the gateway connection itself.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use {
    anyhow::Result,
    dolmetscher_channels::ChannelRegistry,
    dolmetscher_translate::Translator,
    dolmetscher_voice::TtsProvider,
    serenity::{
        all::{
            ChannelId, Context, CreateAttachment, CreateMessage, EventHandler, GatewayIntents,
            Mentionable, Message, Ready,
        },
        async_trait,
    },
    tracing::{error, info, warn},
};

use crate::{
    commands::{self, Command},
    config::DiscordConfig,
    pipeline,
};

/// Handler for Discord gateway events.
pub struct Handler {
    config: DiscordConfig,
    registry: Arc<ChannelRegistry>,
    translator: Arc<dyn Translator>,
    tts: Arc<dyn TtsProvider>,
    /// Own user id, recorded at `ready` (0 = not yet connected).
    bot_user_id: AtomicU64,
}

impl Handler {
    pub fn new(
        config: DiscordConfig,
        registry: Arc<ChannelRegistry>,
        translator: Arc<dyn Translator>,
        tts: Arc<dyn TtsProvider>,
    ) -> Self {
        Self {
            config,
            registry,
            translator,
            tts,
            bot_user_id: AtomicU64::new(0),
        }
    }

    /// Required gateway intents for the bot.
    #[must_use]
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Whether the author holds the configured admin role in the message's
    /// guild. Messages outside a guild never pass the check.
    async fn holds_admin_role(&self, ctx: &Context, msg: &Message) -> Result<bool> {
        let Some(guild_id) = msg.guild_id else {
            return Ok(false);
        };
        let roles = ctx.http.get_guild_roles(guild_id).await?;
        let Some(admin) = roles.iter().find(|r| r.name == self.config.admin_role) else {
            return Ok(false);
        };
        // The gateway payload usually carries the member; fall back to a
        // member fetch for the rare message where it is absent.
        if let Some(member) = &msg.member {
            return Ok(member.roles.contains(&admin.id));
        }
        let member = ctx.http.get_member(guild_id, msg.author.id).await?;
        Ok(member.roles.contains(&admin.id))
    }

    async fn handle_command(&self, ctx: &Context, msg: &Message, command: Command) {
        let has_role = match self.holds_admin_role(ctx, msg).await {
            Ok(has_role) => has_role,
            Err(e) => {
                error!(error = %e, command = ?command, "role lookup failed");
                return;
            },
        };

        let reply = match commands::execute(
            command,
            &self.registry,
            msg.channel_id.get(),
            has_role,
        )
        .await
        {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, command = ?command, "command failed");
                return;
            },
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, reply.text()).await {
            warn!(error = %e, "failed to send command reply");
        }
    }

    /// Translate the message, synthesize the translation, reply with text
    /// plus audio. Either step failing drops the message with a log entry
    /// and no reply.
    async fn relay(&self, ctx: &Context, msg: &Message) {
        let _typing = msg.channel_id.start_typing(&ctx.http);

        let Some((translated, audio)) = pipeline::translate_and_speak(
            self.translator.as_ref(),
            self.tts.as_ref(),
            &msg.content,
        )
        .await
        else {
            return;
        };

        let filename = format!("uebersetzung.{}", audio.format.extension());
        let reply = CreateMessage::new()
            .content(translated)
            .add_file(CreateAttachment::bytes(audio.data.to_vec(), filename));

        if let Err(e) = msg.channel_id.send_message(&ctx.http, reply).await {
            warn!(error = %e, channel = %msg.channel_id, "failed to send relay reply");
        }
    }

    /// Point the author at the registered channels. Channels the bot can no
    /// longer resolve are skipped but stay in the registry.
    async fn send_guidance(&self, ctx: &Context, msg: &Message) {
        let mut mentions = Vec::new();
        for id in self.registry.list().await {
            let channel_id = ChannelId::new(id);
            if ctx.http.get_channel(channel_id).await.is_ok() {
                mentions.push(channel_id.mention().to_string());
            }
        }

        let text = commands::guidance_text(&mentions);
        if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
            warn!(error = %e, channel = %msg.channel_id, "failed to send guidance reply");
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.bot_user_id.store(ready.user.id.get(), Ordering::Relaxed);
        info!(
            bot_name = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "discord bot ready"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Never reply to our own messages.
        if msg.author.id.get() == self.bot_user_id.load(Ordering::Relaxed) {
            return;
        }

        if let Some(command) = Command::parse(&msg.content, &self.config.command_prefix) {
            self.handle_command(&ctx, &msg, command).await;
            return;
        }

        if self.registry.contains(msg.channel_id.get()).await {
            self.relay(&ctx, &msg).await;
        } else {
            self.send_guidance(&ctx, &msg).await;
        }
    }
}

//! Discord front end: event dispatch into the command registry and the
//! documentation service.
//!
//! # Gateway Intents
//!
//! - `GUILD_MESSAGES`, `DIRECT_MESSAGES` - receive commands
//! - `MESSAGE_CONTENT` - read them (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS`, `DIRECT_MESSAGE_REACTIONS` - page navigation

pub mod commands;
pub mod embed;

use crate::bot::commands::{CommandRegistry, parse_invocation};
use crate::bot::embed::page_embed;
use crate::config::BotConfig;
use crate::docs::{DocService, PageKind};
use crate::error::BotError;
use crate::fetch::HttpFetcher;
use serenity::all::{
    Client, Context, EditMessage, EventHandler, GatewayIntents, Message, MessageType, Reaction,
    ReactionType, Ready,
};
use serenity::async_trait;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::RwLock;

/// Settings that `reload` can change while running
#[derive(Debug, Clone)]
pub struct Settings {
    pub prefixes: Vec<String>,
    pub owners: Vec<u64>,
}

impl From<&BotConfig> for Settings {
    fn from(config: &BotConfig) -> Self {
        Self {
            prefixes: config.prefixes.clone(),
            owners: config.owners.clone(),
        }
    }
}

/// Everything the commands can reach
pub struct BotContext {
    pub config_path: PathBuf,
    pub settings: RwLock<Settings>,
    pub commands: CommandRegistry,
    pub docs: DocService<HttpFetcher>,
    pub started: Instant,
}

impl BotContext {
    pub fn new(config: &BotConfig, config_path: PathBuf) -> Result<Self, BotError> {
        let fetcher = HttpFetcher::new(&config.docs)?;
        let docs = DocService::new(fetcher, &config.docs)?;

        Ok(Self {
            config_path,
            settings: RwLock::new(Settings::from(config)),
            commands: CommandRegistry::with_defaults(),
            docs,
            started: Instant::now(),
        })
    }

    /// Swap in the reloadable part of `config`
    pub async fn apply(&self, config: &BotConfig) {
        *self.settings.write().await = Settings::from(config);
    }
}

/// Discord bot event handler
pub struct Handler {
    bot: BotContext,
}

impl Handler {
    pub fn new(bot: BotContext) -> Self {
        Self { bot }
    }
}

fn is_system(message: &Message) -> bool {
    !matches!(message.kind, MessageType::Regular | MessageType::InlineReply)
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        ::log::info!("{} is connected to Discord", ready.user.name);
        ::log::debug!("Logged in as {}, ID: {}", ready.user.tag(), ready.user.id);
    }

    async fn message(&self, ctx: Context, message: Message) {
        if message.author.bot || is_system(&message) {
            return;
        }

        let bot_id = ctx.cache.current_user().id.get();
        let settings = self.bot.settings.read().await.clone();
        let Some(invocation) = parse_invocation(&message.content, &settings.prefixes, bot_id)
        else {
            return;
        };

        let command = invocation.name().and_then(|name| self.bot.commands.find(name));
        let Some(command) = command else {
            if invocation.bare_prefix {
                for command in self.bot.commands.prefix_commands() {
                    let name = command.info().name;
                    if let Err(e) = command.run(&self.bot, &ctx, &message, &invocation.words).await {
                        ::log::error!("Command '{}' failed: {}", name, e);
                    }
                }
            }
            return;
        };

        let info = command.info();
        if info.owner_only && !settings.owners.contains(&message.author.id.get()) {
            ::log::debug!("Ignoring '{}' from non-owner {}", info.name, message.author.name);
            return;
        }

        ::log::info!("Command '{}' executed by '{}'.", info.name, message.author.name);
        if let Err(e) = command.run(&self.bot, &ctx, &message, invocation.args()).await {
            ::log::error!("Command '{}' failed: {}", info.name, e);
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let Some(user_id) = reaction.user_id else {
            return;
        };
        if user_id == ctx.cache.current_user().id {
            return;
        }

        let Some(session) = self.bot.docs.session(reaction.message_id.get()).await else {
            return;
        };
        if session.user_id != user_id.get() {
            return;
        }

        let ReactionType::Unicode(emoji) = &reaction.emoji else {
            return;
        };
        let Some(kind) = PageKind::from_emoji(emoji.trim_end_matches('\u{fe0f}')) else {
            return;
        };

        match self
            .bot
            .docs
            .navigate(user_id.get(), &session.link, &session.fields, Some(kind))
            .await
        {
            Ok(page) => {
                let edit = EditMessage::new().embed(page_embed(&page));
                if let Err(e) = reaction
                    .channel_id
                    .edit_message(&ctx.http, reaction.message_id, edit)
                    .await
                {
                    ::log::error!("Failed to edit documentation message: {}", e);
                }
            }
            Err(e) => ::log::warn!("Cannot render {:?} page of {}: {}", kind, session.link, e),
        }

        if let Err(e) = reaction.delete(&ctx.http).await {
            ::log::debug!("Cannot remove navigation reaction: {}", e);
        }
    }
}

/// Connects to Discord and serves events until the connection ends
pub async fn start(config: BotConfig, config_path: PathBuf) -> Result<(), BotError> {
    let token = config.token()?.to_string();

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let handler = Handler::new(BotContext::new(&config, config_path)?);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    ::log::info!("Starting Discord bot...");
    client.start().await?;

    Ok(())
}

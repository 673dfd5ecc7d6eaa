use crate::bot::BotContext;
use crate::bot::commands::{Command, CommandInfo};
use crate::config::BotConfig;
use crate::error::{BotError, ConfigError};
use serenity::all::{Context, Message};
use serenity::async_trait;
use std::path::Path;

static INFO: CommandInfo = CommandInfo {
    name: "reload",
    aliases: &["rl"],
    description: "Reloads the configuration and empties the documentation cache.",
    usage: "reload",
    owner_only: true,
    prefix_command: false,
};

/// Rereads the config file. Prefixes and owners apply at once; the
/// documentation domain and locale only change on restart.
pub struct ReloadCommand;

/// Unlike startup, a missing file is an error here; defaults would drop
/// the owner list.
fn reread_config(path: &Path) -> Result<BotConfig, ConfigError> {
    BotConfig::from_file(path)
}

#[async_trait]
impl Command for ReloadCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn run(
        &self,
        bot: &BotContext,
        ctx: &Context,
        message: &Message,
        _args: &[String],
    ) -> Result<(), BotError> {
        let config = reread_config(&bot.config_path)?;
        bot.apply(&config).await;
        bot.docs.clear_cache().await;

        ::log::info!("Configuration reloaded from {}", bot.config_path.display());
        let labels = bot.docs.locale().labels();
        message.channel_id.say(&ctx.http, labels.reloaded).await?;

        Ok(())
    }
}

use crate::bot::BotContext;
use crate::bot::commands::{Command, CommandInfo};
use crate::error::BotError;
use crate::format::parse_relative_date;
use serenity::all::{Context, Message};
use serenity::async_trait;

static INFO: CommandInfo = CommandInfo {
    name: "restart",
    aliases: &["reboot", "rb"],
    description: "Stops the bot so its supervisor can start it again.",
    usage: "restart",
    owner_only: true,
    prefix_command: false,
};

pub struct RestartCommand;

#[async_trait]
impl Command for RestartCommand {
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
        let labels = bot.docs.locale().labels();
        message.channel_id.say(&ctx.http, labels.restarting).await?;

        ::log::info!(
            "Restart requested by {} after {} of uptime",
            message.author.name,
            parse_relative_date("jj days hh:mm:ss", bot.started.elapsed())
        );
        std::process::exit(0);
    }
}

use crate::bot::BotContext;
use crate::bot::commands::{Command, CommandInfo};
use crate::bot::embed::page_embed;
use crate::docs::{LookupOutcome, PageKind, Session};
use crate::error::BotError;
use serenity::all::{Context, CreateMessage, Message, ReactionType};
use serenity::async_trait;

static INFO: CommandInfo = CommandInfo {
    name: "doc",
    aliases: &["mdn"],
    description: "Shows the MDN documentation of a JavaScript global object.",
    usage: "doc [name] [--debug]",
    owner_only: false,
    prefix_command: true,
};

const DEBUG_FLAG: &str = "--debug";

pub struct DocCommand;

/// Splits the arguments into the searched name and the debug flag
fn parse_query(args: &[String]) -> (String, bool) {
    let debug = args.iter().any(|arg| arg == DEBUG_FLAG);
    let query = args
        .iter()
        .filter(|arg| *arg != DEBUG_FLAG)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    (query, debug)
}

#[async_trait]
impl Command for DocCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    async fn run(
        &self,
        bot: &BotContext,
        ctx: &Context,
        message: &Message,
        args: &[String],
    ) -> Result<(), BotError> {
        let (query, debug) = parse_query(args);
        if debug {
            ::log::info!("Documentation link for '{}': {}", query, bot.docs.link_for(&query));
        }

        match bot.docs.lookup(&query).await {
            LookupOutcome::Found { link, fields, page } => {
                let builder = CreateMessage::new().embed(page_embed(&page));
                let sent = message.channel_id.send_message(&ctx.http, builder).await?;

                let kinds = PageKind::available(&fields);
                bot.docs
                    .open_session(
                        sent.id.get(),
                        Session {
                            user_id: message.author.id.get(),
                            link,
                            fields,
                        },
                    )
                    .await;

                for kind in kinds {
                    sent.react(&ctx.http, ReactionType::Unicode(kind.emoji().to_string()))
                        .await?;
                }
            }
            LookupOutcome::Fallback { page } => {
                let builder = CreateMessage::new().embed(page_embed(&page));
                message.channel_id.send_message(&ctx.http, builder).await?;
            }
            LookupOutcome::Failed(e) => {
                ::log::error!("Documentation lookup for '{}' failed: {}", query, e);
                let labels = bot.docs.locale().labels();
                message.channel_id.say(&ctx.http, labels.lookup_failed).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query(&args(&["Array"])), ("Array".to_string(), false));
        assert_eq!(
            parse_query(&args(&["Array", "--debug", "prototype"])),
            ("Array prototype".to_string(), true)
        );
        assert_eq!(parse_query(&[]), (String::new(), false));
    }
}

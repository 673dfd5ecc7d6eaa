//! Chat commands and the registry that dispatches to them.

pub mod doc;
pub mod reload;
pub mod restart;

use crate::bot::BotContext;
use crate::error::BotError;
use serenity::all::{Context, Message};
use serenity::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Static description of a command
#[derive(Debug)]
pub struct CommandInfo {
    pub name: &'static str,
    /// Lower-case alternative names
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    /// Silently ignored unless the author is a configured owner
    pub owner_only: bool,
    /// Run when a prefix is sent on its own
    pub prefix_command: bool,
}

#[async_trait]
pub trait Command: Send + Sync {
    fn info(&self) -> &'static CommandInfo;

    async fn run(
        &self,
        bot: &BotContext,
        ctx: &Context,
        message: &Message,
        args: &[String],
    ) -> Result<(), BotError>;
}

/// Commands by name
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(doc::DocCommand));
        registry.register(Arc::new(reload::ReloadCommand));
        registry.register(Arc::new(restart::RestartCommand));
        registry
    }

    /// Add `command`, replacing any command of the same name
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.info().name;
        if self.commands.insert(name, command).is_some() {
            ::log::warn!("Command '{}' registered twice, keeping the latest", name);
        } else {
            ::log::info!("Command '{}' loaded successfully.", name);
        }
    }

    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Command>> {
        let command = self.commands.remove(name)?;
        ::log::info!("Command '{}' unloaded successfully.", name);
        Some(command)
    }

    /// Command whose name or one of whose aliases is `name`, ignoring case
    pub fn find(&self, name: &str) -> Option<Arc<dyn Command>> {
        let name = name.to_lowercase();
        self.commands
            .values()
            .find(|command| {
                let info = command.info();
                info.name.to_lowercase() == name || info.aliases.contains(&name.as_str())
            })
            .cloned()
    }

    pub fn prefix_commands(&self) -> Vec<Arc<dyn Command>> {
        self.commands
            .values()
            .filter(|command| command.info().prefix_command)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A message addressed to the bot, split into words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub prefix: String,
    /// Every word after the prefix; the first one names the command
    pub words: Vec<String>,
    /// The prefix was a word of its own, e.g. `! doc` or a bare mention
    pub bare_prefix: bool,
}

impl Invocation {
    pub fn name(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Words after the command name
    pub fn args(&self) -> &[String] {
        self.words.get(1..).unwrap_or_default()
    }
}

/// Splits `content` into an invocation when it starts with a configured
/// prefix or a mention of the bot
///
/// When several prefixes match the longest one wins, so `!!` beats `!`.
pub fn parse_invocation(content: &str, prefixes: &[String], bot_id: u64) -> Option<Invocation> {
    let mentions = [format!("<@{}>", bot_id), format!("<@!{}>", bot_id)];
    let prefix = prefixes
        .iter()
        .map(|prefix| prefix.trim())
        .chain(mentions.iter().map(String::as_str))
        .filter(|prefix| !prefix.is_empty() && content.starts_with(prefix))
        .max_by_key(|prefix| prefix.len())?;

    let words = content[prefix.len()..]
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let bare_prefix = content.split_whitespace().next() == Some(prefix);

    Some(Invocation {
        prefix: prefix.to_string(),
        words,
        bare_prefix,
    })
}

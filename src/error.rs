//! Error types for each layer of the bot.
//!
//! Fetch and conversion failures roll up into [`DocError`], which the
//! documentation service hands back as a value instead of propagating. Command
//! handlers return [`BotError`], which the event handler logs.

use thiserror::Error;

/// Failure to retrieve a documentation page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered 404; the lookup falls back to the directory page.
    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// Failure to turn an HTML fragment into markdown
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The markup nests deeper than the converter is willing to walk.
    #[error("markup nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

/// Failure of a documentation lookup
#[derive(Error, Debug)]
pub enum DocError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Invalid or unreadable configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid fetch timeout '{0}'")]
    InvalidTimeout(String),

    #[error("invalid documentation domain: {0}")]
    InvalidDomain(#[from] url::ParseError),

    #[error("no Discord token configured (set `token` or DISCORD_TOKEN)")]
    MissingToken,

    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Error returned by command handlers
#[derive(Error, Debug)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Doc(#[from] DocError),

    /// Boxed because `serenity::Error` is large.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for BotError {
    fn from(error: serenity::Error) -> Self {
        BotError::Discord(Box::new(error))
    }
}

use crate::error::ConfigError;
use crate::format::parse_duration;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration of the documentation lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Root of the documentation site
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Language of the pages and of the rendered labels
    #[serde(default)]
    pub locale: Locale,

    /// Longest wait for one page, e.g. `30s` or `2minutes`
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Configuration of the bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Discord bot token; `DISCORD_TOKEN` takes precedence
    #[serde(default)]
    pub token: Option<String>,

    /// Prefixes that introduce a command
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Users allowed to run owner-only commands
    #[serde(default)]
    pub owners: Vec<u64>,

    #[serde(default)]
    pub docs: DocsConfig,
}

/// Default documentation site
fn default_domain() -> String {
    "https://developer.mozilla.org".to_string()
}

/// Default page fetch timeout
fn default_fetch_timeout() -> String {
    "30s".to_string()
}

/// Default user agent for page fetches
fn default_user_agent() -> String {
    format!("docbot/{}", env!("CARGO_PKG_VERSION"))
}

/// Default command prefixes
fn default_prefixes() -> Vec<String> {
    vec!["!".to_string()]
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            locale: Locale::default(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            prefixes: default_prefixes(),
            owners: Vec::new(),
            docs: DocsConfig::default(),
        }
    }
}

impl DocsConfig {
    /// The fetch timeout as a duration
    pub fn fetch_timeout(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.fetch_timeout)
            .map(|span| span.as_duration())
            .filter(|duration| !duration.is_zero())
            .ok_or_else(|| ConfigError::InvalidTimeout(self.fetch_timeout.clone()))
    }
}

impl BotConfig {
    /// Load configuration from a file, then apply environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let mut config = Self::from_json(&contents)?;
        config.apply_env();
        Ok(config)
    }

    /// Load `path` when it exists, else run on defaults and the environment
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        ::log::warn!("Config file {} not found, using defaults", path.display());
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        // Override the token with an environment variable if provided
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        url::Url::parse(&config.docs.domain)?;
        config.docs.fetch_timeout()?;
        Ok(config)
    }

    pub fn token(&self) -> Result<&str, ConfigError> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owners.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_json("{}").unwrap();

        assert_eq!(config.prefixes, vec!["!"]);
        assert!(config.owners.is_empty());
        assert_eq!(config.docs.domain, "https://developer.mozilla.org");
        assert_eq!(config.docs.locale, Locale::Fr);
        assert_eq!(config.docs.fetch_timeout().unwrap(), Duration::from_secs(30));
        assert!(matches!(config.token(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_full_config() {
        let config = BotConfig::from_json(
            r#"{
                "token": "abc",
                "prefixes": ["?", "doc!"],
                "owners": [42],
                "docs": { "locale": "en", "fetch_timeout": "2minutes" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.token().unwrap(), "abc");
        assert!(config.is_owner(42));
        assert!(!config.is_owner(7));
        assert_eq!(config.docs.locale, Locale::En);
        assert_eq!(config.docs.fetch_timeout().unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = BotConfig::from_json(r#"{ "docs": { "fetch_timeout": "later" } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(value)) if value == "later"));
    }

    #[test]
    fn test_invalid_domain() {
        let result = BotConfig::from_json(r#"{ "docs": { "domain": "not a url" } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidDomain(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BotConfig::from_json("{ prefixes"),
            Err(ConfigError::Json(_))
        ));
    }
}

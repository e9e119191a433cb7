//! Bot configuration, loaded from environment variables.

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub struct BotConfig {
    pub bot_token: String,
    /// Path of the persisted stats JSON document.
    pub stats_file: PathBuf,
    /// Lowercased usernames allowed to run the privileged /stats command.
    pub admins: HashSet<String>,
    pub log_file: String,
    pub libretranslate_url: String,
    pub libretranslate_api_key: Option<String>,
    /// Per-call timeout for translation provider requests.
    pub translate_timeout: Duration,
    pub translate_retries: u32,
    /// Backoff before the second primary attempt; doubles each retry.
    pub translate_backoff: Duration,
}

impl BotConfig {
    /// Loads config from the environment. If `token` is provided it overrides
    /// `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let stats_file =
            PathBuf::from(env::var("STATS_FILE").unwrap_or_else(|_| "stats.json".to_string()));
        let admins = env::var("STATS_ADMINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().trim_start_matches('@').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "lingvo-bot.log".to_string());
        let libretranslate_url = env::var("LIBRETRANSLATE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let libretranslate_api_key = env::var("LIBRETRANSLATE_API_KEY").ok();
        let translate_timeout = Duration::from_secs(
            env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        );
        let translate_retries = env::var("TRANSLATE_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        let translate_backoff = Duration::from_millis(
            env::var("TRANSLATE_BACKOFF_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
        );

        Ok(Self {
            bot_token,
            stats_file,
            admins,
            log_file,
            libretranslate_url,
            libretranslate_api_key,
            translate_timeout,
            translate_retries,
            translate_backoff,
        })
    }

    /// True if the (optional) username may run privileged stats commands.
    pub fn is_admin(&self, username: Option<&str>) -> bool {
        match username {
            Some(name) => self.admins.contains(&name.trim().to_lowercase()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "STATS_FILE",
            "STATS_ADMINS",
            "LOG_FILE",
            "LIBRETRANSLATE_URL",
            "LIBRETRANSLATE_API_KEY",
            "TRANSLATE_TIMEOUT_SECS",
            "TRANSLATE_RETRIES",
            "TRANSLATE_BACKOFF_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.stats_file, PathBuf::from("stats.json"));
        assert!(config.admins.is_empty());
        assert_eq!(config.log_file, "lingvo-bot.log");
        assert_eq!(config.libretranslate_url, "http://localhost:5000");
        assert!(config.libretranslate_api_key.is_none());
        assert_eq!(config.translate_timeout, Duration::from_secs(10));
        assert_eq!(config.translate_retries, 3);
        assert_eq!(config.translate_backoff, Duration::from_millis(500));
    }

    #[test]
    #[serial]
    fn test_token_argument_overrides_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "from_env");

        let config = BotConfig::load(Some("from_arg".to_string())).unwrap();
        assert_eq!(config.bot_token, "from_arg");
    }

    #[test]
    #[serial]
    fn test_missing_token_is_an_error() {
        clear_env();
        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_admins_parsing_and_check() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("STATS_ADMINS", "@Anna, boris ,,");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.admins.len(), 2);
        assert!(config.is_admin(Some("anna")));
        assert!(config.is_admin(Some("ANNA")));
        assert!(config.is_admin(Some("boris")));
        assert!(!config.is_admin(Some("mallory")));
        assert!(!config.is_admin(None));
    }
}

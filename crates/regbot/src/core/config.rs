//! Startup configuration
//!
//! Everything is read from the environment once, at startup, into a typed
//! [`Config`]. A missing or malformed required variable aborts startup.

use std::env;
use std::time::Duration;

use log::LevelFilter;
use secrecy::SecretString;
use teloxide::types::ChatId;
use url::Url;

use crate::core::error::ConfigError;
use crate::registration::CompletionKeywords;

/// Environment variable names
pub mod vars {
    pub const BOT_TOKEN: &str = "BOT_TOKEN";
    /// Accepted as a fallback for `BOT_TOKEN`, same as teloxide's own default
    pub const TELOXIDE_TOKEN: &str = "TELOXIDE_TOKEN";
    pub const GROUP_CHAT_ID: &str = "GROUP_CHAT_ID";
    pub const BOT_API_URL: &str = "BOT_API_URL";
    pub const COMPLETION_KEYWORDS: &str = "COMPLETION_KEYWORDS";
    pub const ANNOUNCE_SUBMISSIONS: &str = "ANNOUNCE_SUBMISSIONS";
    pub const LOG_FILE_PATH: &str = "LOG_FILE_PATH";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Form limits
pub mod limits {
    /// Maximum number of photos attached to one submission
    pub const MAX_PHOTOS: usize = 3;

    /// Maximum length of a text field after trimming, in UTF-16 code units
    /// (the unit Telegram counts message length in).
    pub const MAX_FIELD_LEN: usize = 200;

    /// Bot API limit for a photo caption after entity parsing, in UTF-16 code units
    pub const MAX_CAPTION_LEN: usize = 1024;

    /// Length of `text` as Telegram counts it
    pub fn telegram_len(text: &str) -> usize {
        text.encode_utf16().count()
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Typed runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Bot API token
    pub bot_token: SecretString,
    /// Group that receives completed submissions
    pub group_chat_id: ChatId,
    /// Custom Bot API server, if any
    pub bot_api_url: Option<Url>,
    pub completion_keywords: CompletionKeywords,
    /// Send a short "new submission" notice before the record itself
    pub announce_submissions: bool,
    pub log_file_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let token = get(vars::BOT_TOKEN)
            .or_else(|| get(vars::TELOXIDE_TOKEN))
            .ok_or(ConfigError::Missing(vars::BOT_TOKEN))?;
        validate_token(&token)?;

        let group_chat_id = get(vars::GROUP_CHAT_ID)
            .ok_or(ConfigError::Missing(vars::GROUP_CHAT_ID))?
            .parse::<i64>()
            .map(ChatId)
            .map_err(|e| ConfigError::invalid(vars::GROUP_CHAT_ID, e.to_string()))?;

        let bot_api_url = get(vars::BOT_API_URL)
            .map(|raw| Url::parse(&raw).map_err(|e| ConfigError::invalid(vars::BOT_API_URL, e.to_string())))
            .transpose()?;

        let completion_keywords = match get(vars::COMPLETION_KEYWORDS) {
            Some(raw) => CompletionKeywords::parse(&raw)
                .ok_or_else(|| ConfigError::invalid(vars::COMPLETION_KEYWORDS, "no keywords given"))?,
            None => CompletionKeywords::default(),
        };

        let announce_submissions = get(vars::ANNOUNCE_SUBMISSIONS)
            .map(|raw| parse_bool(&raw).ok_or_else(|| ConfigError::invalid(vars::ANNOUNCE_SUBMISSIONS, raw)))
            .transpose()?
            .unwrap_or(false);

        let log_level = get(vars::LOG_LEVEL)
            .map(|raw| {
                raw.parse::<LevelFilter>()
                    .map_err(|_| ConfigError::invalid(vars::LOG_LEVEL, raw))
            })
            .transpose()?
            .unwrap_or(LevelFilter::Info);

        Ok(Self {
            bot_token: SecretString::from(token),
            group_chat_id,
            bot_api_url,
            completion_keywords,
            announce_submissions,
            log_file_path: get(vars::LOG_FILE_PATH),
            log_level,
        })
    }
}

/// Checks the `<bot id>:<secret>` shape of a Bot API token
fn validate_token(token: &str) -> Result<(), ConfigError> {
    match token.split_once(':') {
        Some((id, secret)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty() => {
            Ok(())
        }
        _ => Err(ConfigError::invalid(vars::BOT_TOKEN, "expected <bot id>:<secret>")),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

use std::time::Duration;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer};

use crate::card::{CardStyle, WordCase};
use crate::date::{self, DateFormat};
use crate::pagination::FailurePolicy;

/// Per-deployment settings, embedded by the server as JSON. Every field is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for API paths; empty means same origin.
    pub api_base: String,
    pub date_format: DateFormat,
    /// Date layout of `/api/wotd`, which differs from the history endpoint.
    pub wotd_date_format: DateFormat,
    pub word_case: WordCase,
    pub page_timeout_ms: u64,
    pub failure_policy: FailurePolicy,
    /// Daily word release, `HH:MM` UTC.
    #[serde(deserialize_with = "time_of_day")]
    pub release_time: NaiveTime,
    pub theme_cooldown_ms: u64,
    pub asset_base: String,
    pub forget_endpoint: String,
    pub card_selector: String,
    pub card_date_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            date_format: DateFormat::Iso,
            wotd_date_format: DateFormat::DayFirst,
            word_case: WordCase::Capitalized,
            page_timeout_ms: 10_000,
            failure_policy: FailurePolicy::Halt,
            release_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap_or(NaiveTime::MIN),
            theme_cooldown_ms: 200,
            asset_base: "/www/static/assets/".to_owned(),
            forget_endpoint: "/api/discord_forget".to_owned(),
            card_selector: ".wotd-card".to_owned(),
            card_date_selector: ".wotd-date".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed site config: {0}")]
    Malformed(String),
    #[error("page_timeout_ms must be greater than zero")]
    ZeroTimeout,
    #[error("{field} of {ms} ms exceeds the browser timer limit of {max} ms", max = MAX_TIMER_MS)]
    TimerTooLong { field: &'static str, ms: u64 },
}

/// Browsers store timer delays as a signed 32-bit millisecond count.
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        if config.page_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        for (field, ms) in [
            ("page_timeout_ms", config.page_timeout_ms),
            ("theme_cooldown_ms", config.theme_cooldown_ms),
        ] {
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::TimerTooLong { field, ms });
            }
        }
        Ok(config)
    }

    pub fn card_style(&self) -> CardStyle {
        CardStyle {
            word_case: self.word_case,
            date_format: self.date_format,
        }
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_millis(self.page_timeout_ms)
    }

    pub fn theme_cooldown(&self) -> Duration {
        Duration::from_millis(self.theme_cooldown_ms)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

fn time_of_day<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    date::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
}

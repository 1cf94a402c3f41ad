use serde::{Deserialize, Serialize};

/// A single past word of the day as returned by `/api/query_previous`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub ipa: String,
    pub pos: String,
    pub definition: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub has_more: bool,
    pub results: Vec<WordEntry>,
}

/// Today's word from `/api/wotd`. The backend calls the part of speech `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wotd {
    pub word: String,
    pub ipa: String,
    #[serde(rename = "type", alias = "pos")]
    pub pos: String,
    pub definition: String,
    pub date: String,
}

impl From<Wotd> for WordEntry {
    fn from(wotd: Wotd) -> Self {
        Self {
            word: wotd.word,
            ipa: wotd.ipa,
            pos: wotd.pos,
            definition: wotd.definition,
            date: wotd.date,
        }
    }
}

/// Body of every form endpoint response, success or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

/// The subscriber a Discord configuration link was issued for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberIdentity {
    pub user_id: Option<String>,
    pub guild_id: Option<String>,
    pub channel_id: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateStyle {
    Long,
    #[default]
    Medium,
    ShortHyphen,
    ShortSlash,
}

impl DateStyle {
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Long,
        DateStyle::Medium,
        DateStyle::ShortHyphen,
        DateStyle::ShortSlash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateStyle::Long => "Long",
            DateStyle::Medium => "Medium",
            DateStyle::ShortHyphen => "ShortHyphen",
            DateStyle::ShortSlash => "ShortSlash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateStyle::Long => "Long (March 5th, 2024)",
            DateStyle::Medium => "Medium (Mar 5, 2024)",
            DateStyle::ShortHyphen => "Short (05-03-2024)",
            DateStyle::ShortSlash => "Short (05/03/2024)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    pub timezone: String,
    /// Minutes after local midnight.
    pub time: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFormat {
    pub include_date: bool,
    pub include_ipa: bool,
    pub display_dmy: bool,
    pub silent_message: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSettingsRequest {
    #[serde(flatten)]
    pub identity: SubscriberIdentity,
    pub time_settings: TimeSettings,
    pub message_format: MessageFormat,
    pub message_date_style: DateStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendWordRequest {
    pub word: String,
    pub ipa: String,
    pub pos: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub admin_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

//! Form model for the Discord delivery settings page.

use wotd_api::{DateStyle, MessageFormat, SaveSettingsRequest, SubscriberIdentity, TimeSettings};

use crate::date::{self, DateError};

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_TIME: &str = "00:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub timezone: String,
    /// `HH:MM` as produced by a time input.
    pub time: String,
    pub include_date: bool,
    pub include_ipa: bool,
    pub display_dmy: bool,
    pub silent_message: bool,
    pub date_style: DateStyle,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            time: DEFAULT_TIME.to_owned(),
            include_date: true,
            include_ipa: true,
            display_dmy: true,
            silent_message: false,
            date_style: DateStyle::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("This settings link is missing its token. Please request a new link.")]
    MissingToken,
    #[error("Please pick a timezone.")]
    MissingTimezone,
    #[error("Invalid delivery time: {0}")]
    Time(#[from] DateError),
}

/// Every settings endpoint needs the token the link was issued with.
pub fn require_token(identity: &SubscriberIdentity) -> Result<(), SettingsError> {
    match identity.token.as_deref() {
        Some(token) if !token.trim().is_empty() => Ok(()),
        _ => Err(SettingsError::MissingToken),
    }
}

impl SettingsForm {
    pub fn to_request(
        &self,
        identity: SubscriberIdentity,
    ) -> Result<SaveSettingsRequest, SettingsError> {
        require_token(&identity)?;

        let timezone = self.timezone.trim();
        if timezone.is_empty() {
            return Err(SettingsError::MissingTimezone);
        }
        let time = date::minutes_after_midnight(date::parse_time_of_day(&self.time)?);

        Ok(SaveSettingsRequest {
            identity,
            time_settings: TimeSettings {
                timezone: timezone.to_owned(),
                time,
            },
            message_format: MessageFormat {
                include_date: self.include_date,
                include_ipa: self.include_ipa,
                display_dmy: self.display_dmy,
                silent_message: self.silent_message,
            },
            message_date_style: self.date_style,
        })
    }
}

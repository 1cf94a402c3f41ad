use chrono::NaiveDate;

use crate::date::{self, DateError, DateFormat};

/// The date information a rendered card exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDate {
    /// Raw `data-date` attribute, absent on cards rendered by older templates.
    pub attribute: Option<String>,
    /// Human readable text, e.g. `March 5th, 2024`.
    pub text: String,
}

impl CardDate {
    pub fn date(&self, format: DateFormat) -> Result<NaiveDate, DateError> {
        if let Some(Ok(date)) = self.attribute.as_deref().map(|raw| format.parse(raw)) {
            return Ok(date);
        }
        date::parse_display(&self.text)
    }
}

/// Boundary date sent as `?date=` when asking for the next page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Computes the cursor from the last rendered card, falling back to
    /// `today` when nothing has been rendered.
    pub fn derive(
        last_card: Option<&CardDate>,
        today: NaiveDate,
        format: DateFormat,
    ) -> Result<Self, CursorError> {
        let date = match last_card {
            None => today,
            Some(card) => card.date(format)?,
        };
        Ok(Self(format.format(date)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    #[error("Last card has no readable date: {0}")]
    Unreadable(#[from] DateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn card(attribute: Option<&str>, text: &str) -> CardDate {
        CardDate {
            attribute: attribute.map(str::to_owned),
            text: text.to_owned(),
        }
    }

    #[test]
    fn no_cards_means_today() {
        let cursor = Cursor::derive(None, today(), DateFormat::Iso).unwrap();
        assert_eq!(cursor.as_str(), "2026-10-16");

        let cursor = Cursor::derive(None, today(), DateFormat::DayFirst).unwrap();
        assert_eq!(cursor.as_str(), "16-10-2026");
    }

    #[test]
    fn attribute_wins_over_text() {
        let last = card(Some("2024-03-05"), "January 1st, 1970");
        let cursor = Cursor::derive(Some(&last), today(), DateFormat::Iso).unwrap();
        assert_eq!(cursor.to_string(), "2024-03-05");
    }

    #[test]
    fn text_is_used_when_attribute_is_missing_or_bad() {
        let legacy = card(None, "March 5th, 2024");
        let cursor = Cursor::derive(Some(&legacy), today(), DateFormat::DayFirst).unwrap();
        assert_eq!(cursor.as_str(), "05-03-2024");

        let broken = card(Some("not-a-date"), "March 5th, 2024");
        let cursor = Cursor::derive(Some(&broken), today(), DateFormat::Iso).unwrap();
        assert_eq!(cursor.as_str(), "2024-03-05");
    }

    #[test]
    fn unpadded_attribute_is_normalised() {
        let last = card(Some("2024-3-5"), "");
        let cursor = Cursor::derive(Some(&last), today(), DateFormat::Iso).unwrap();
        assert_eq!(cursor.as_str(), "2024-03-05");
    }

    #[test]
    fn same_card_same_cursor() {
        let last = card(Some("2023-12-31"), "December 31st, 2023");
        let first = Cursor::derive(Some(&last), today(), DateFormat::Iso).unwrap();
        let other_day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let second = Cursor::derive(Some(&last), other_day, DateFormat::Iso).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unreadable_card_is_an_error() {
        let last = card(None, "");
        assert!(matches!(
            Cursor::derive(Some(&last), today(), DateFormat::Iso),
            Err(CursorError::Unreadable(DateError::UnreadableDisplay(_)))
        ));
    }
}

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Deserialize;

/// Wire format of calendar dates exchanged with the backend.
///
/// One format is chosen per deployment and used both to read entry dates and
/// to write the pagination cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    Iso,
    /// `DD-MM-YYYY`, used by the older site.
    DayFirst,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::DayFirst => "%d-%m-%Y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::DayFirst => "DD-MM-YYYY",
        }
    }

    pub fn parse(&self, input: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(input.trim(), self.pattern()).map_err(|_| {
            DateError::Unparsable {
                input: input.to_owned(),
                format: self.label(),
            }
        })
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("'{input}' is not a {format} date")]
    Unparsable { input: String, format: &'static str },
    #[error("'{0}' is not a readable display date")]
    UnreadableDisplay(String),
    #[error("'{0}' is not a HH:MM time")]
    UnreadableTime(String),
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 100, day % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

/// Formats a date the way cards show it, e.g. `March 5th, 2024`.
pub fn display(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Parses a 24-hour `HH:MM` time of day.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, DateError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| DateError::UnreadableTime(input.trim().to_owned()))
}

pub fn minutes_after_midnight(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Layouts cards have been rendered with: `March 5, 2024` and the server's
/// day-first `5 March 2024`.
const DISPLAY_PATTERNS: [&str; 2] = ["%B %d, %Y", "%d %B %Y"];

/// Reads a date back out of its display form. Ordinal suffixes are dropped
/// before parsing, so `March 5th, 2024`, `March 5, 2024` and `5th March 2024`
/// are all accepted.
pub fn parse_display(text: &str) -> Result<NaiveDate, DateError> {
    let stripped = strip_ordinals(text);
    DISPLAY_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(&stripped, pattern).ok())
        .ok_or_else(|| DateError::UnreadableDisplay(text.trim().to_owned()))
}

fn strip_ordinals(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            let digits = token.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 {
                return token.to_owned();
            }

            let (number, rest) = token.split_at(digits);
            let suffix_len = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            let (suffix, tail) = rest.split_at(suffix_len);
            match suffix.to_ascii_lowercase().as_str() {
                "st" | "nd" | "rd" | "th" => format!("{number}{tail}"),
                _ => token.to_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (101, "st"),
            (111, "th"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn display_uses_month_name_and_suffix() {
        assert_eq!(display(date(2024, 3, 5)), "March 5th, 2024");
        assert_eq!(display(date(2023, 12, 1)), "December 1st, 2023");
        assert_eq!(display(date(2025, 1, 22)), "January 22nd, 2025");
        assert_eq!(display(date(2025, 7, 13)), "July 13th, 2025");
    }

    #[test]
    fn formats_parse_their_own_layout() {
        assert_eq!(DateFormat::Iso.parse("2024-03-05").unwrap(), date(2024, 3, 5));
        assert_eq!(
            DateFormat::DayFirst.parse("05-03-2024").unwrap(),
            date(2024, 3, 5)
        );
        assert_eq!(DateFormat::Iso.format(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(DateFormat::DayFirst.format(date(2024, 3, 5)), "05-03-2024");
    }

    #[test]
    fn formats_reject_the_other_layout() {
        assert!(DateFormat::Iso.parse("05-03-2024").is_err());
        assert!(DateFormat::DayFirst.parse("2024-03-05").is_err());
        assert_eq!(
            DateFormat::Iso.parse("yesterday"),
            Err(DateError::Unparsable {
                input: "yesterday".to_owned(),
                format: "YYYY-MM-DD",
            })
        );
    }

    #[test]
    fn display_text_parses_with_or_without_suffix() {
        assert_eq!(parse_display("March 5th, 2024").unwrap(), date(2024, 3, 5));
        assert_eq!(parse_display("  March 5, 2024\n").unwrap(), date(2024, 3, 5));
        assert_eq!(parse_display("August 31st, 1999").unwrap(), date(1999, 8, 31));
        assert_eq!(parse_display(&display(date(2024, 2, 29))).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn day_first_display_text_parses() {
        assert_eq!(parse_display("5 March 2024").unwrap(), date(2024, 3, 5));
        assert_eq!(parse_display("5th March 2024").unwrap(), date(2024, 3, 5));
        assert_eq!(parse_display("22nd January 2025").unwrap(), date(2025, 1, 22));
        assert_eq!(
            parse_display("March 2024"),
            Err(DateError::UnreadableDisplay("March 2024".to_owned()))
        );
    }

    #[test]
    fn time_of_day_parses_and_counts_minutes() {
        let time = parse_time_of_day("08:30").unwrap();
        assert_eq!(minutes_after_midnight(time), 510);
        assert_eq!(minutes_after_midnight(parse_time_of_day("00:00").unwrap()), 0);
        assert_eq!(minutes_after_midnight(parse_time_of_day("23:59").unwrap()), 1439);
        assert_eq!(
            parse_time_of_day("25:00"),
            Err(DateError::UnreadableTime("25:00".to_owned()))
        );
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn display_text_rejects_garbage() {
        assert_eq!(
            parse_display("Load More"),
            Err(DateError::UnreadableDisplay("Load More".to_owned()))
        );
    }
}

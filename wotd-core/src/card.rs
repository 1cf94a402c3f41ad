use serde::Deserialize;
use wotd_api::WordEntry;

use crate::date::{self, DateFormat};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCase {
    #[default]
    Capitalized,
    AsIs,
}

impl WordCase {
    pub fn apply(&self, word: &str) -> String {
        match self {
            WordCase::AsIs => word.to_owned(),
            WordCase::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Everything a word card displays, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub word: String,
    pub ipa: String,
    pub pos: String,
    /// CSS modifier derived from the lower-cased part of speech.
    pub pos_class: String,
    pub definition: String,
    pub display_date: String,
    /// The entry date in the style's wire format, emitted as `data-date` so the
    /// next cursor can be read back without parsing display text. Dates that
    /// could not be parsed are kept as the backend sent them.
    pub raw_date: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardStyle {
    pub word_case: WordCase,
    pub date_format: DateFormat,
}

impl CardStyle {
    pub fn render(&self, entry: &WordEntry) -> CardView {
        self.render_from(entry, self.date_format)
    }

    /// Renders an entry whose date arrives in `source` rather than the wire
    /// format, as `/api/wotd` does.
    pub fn render_from(&self, entry: &WordEntry, source: DateFormat) -> CardView {
        let (display_date, raw_date) = match source.parse(&entry.date) {
            Ok(parsed) => (date::display(parsed), self.date_format.format(parsed)),
            Err(_) => (entry.date.clone(), entry.date.clone()),
        };

        CardView {
            word: self.word_case.apply(&entry.word),
            ipa: entry.ipa.clone(),
            pos: entry.pos.clone(),
            pos_class: pos_class(&entry.pos),
            definition: entry.definition.clone(),
            display_date,
            raw_date,
        }
    }

    pub fn render_page(&self, entries: &[WordEntry]) -> Vec<CardView> {
        entries.iter().map(|entry| self.render(entry)).collect()
    }
}

fn pos_class(pos: &str) -> String {
    let modifier = pos
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("wotd-pos-{modifier}")
}

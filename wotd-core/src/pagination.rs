//! State machine behind the "load more" word history.
//!
//! The machine owns no DOM and performs no I/O. The caller reads the last
//! rendered card, asks [`Pagination::begin`] for a cursor, performs the
//! request, and hands the outcome to [`Pagination::finish`], which returns the
//! cards to append. The load control must be rendered exactly when
//! [`Pagination::control_visible`] is true.

use chrono::NaiveDate;
use serde::Deserialize;
use wotd_api::PageResult;

use crate::card::{CardStyle, CardView};
use crate::cursor::{CardDate, Cursor, CursorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Control visible, waiting for a click.
    Idle,
    /// Request in flight, control removed.
    Loading,
    /// The backend reported there is nothing older.
    Exhausted,
    /// A request failed under [`FailurePolicy::Halt`].
    Halted,
}

/// What a failed page request leaves behind. Timeouts are always retryable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    Halt,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Request timed out")]
    Timeout,
}

impl PageError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, PageError::Timeout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("Cannot start loading while {0:?}")]
    NotIdle(Phase),
    #[error("No page was requested (currently {0:?})")]
    NotLoading(Phase),
    #[error("Could not read the page: {0}")]
    Precondition(String),
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error(transparent)]
    Page(#[from] PageError),
}

#[derive(Debug, Clone)]
pub struct Pagination {
    phase: Phase,
    policy: FailurePolicy,
    style: CardStyle,
    pages_loaded: usize,
    cards_appended: usize,
    last_error: Option<PaginationError>,
}

impl Pagination {
    /// `has_more` is what the server-rendered page said about older words.
    pub fn new(style: CardStyle, policy: FailurePolicy, has_more: bool) -> Self {
        Self {
            phase: if has_more { Phase::Idle } else { Phase::Exhausted },
            policy,
            style,
            pages_loaded: 0,
            cards_appended: 0,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn control_visible(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// True when the control is back after a failed request.
    pub fn is_retry(&self) -> bool {
        self.phase == Phase::Idle && matches!(self.last_error, Some(PaginationError::Page(_)))
    }

    pub fn last_error(&self) -> Option<&PaginationError> {
        self.last_error.as_ref()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn cards_appended(&self) -> usize {
        self.cards_appended
    }

    /// Moves `Idle -> Loading` and returns the cursor for the request.
    ///
    /// A card whose date cannot be read leaves the machine `Idle` and records
    /// the error; no request should be made.
    pub fn begin(
        &mut self,
        last_card: Option<&CardDate>,
        today: NaiveDate,
    ) -> Result<Cursor, PaginationError> {
        if self.phase != Phase::Idle {
            return Err(PaginationError::NotIdle(self.phase));
        }

        match Cursor::derive(last_card, today, self.style.date_format) {
            Ok(cursor) => {
                self.phase = Phase::Loading;
                self.last_error = None;
                Ok(cursor)
            }
            Err(e) => {
                let e = PaginationError::from(e);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Records a failure to gather what [`Pagination::begin`] needs, such as a
    /// card without a date element. The machine stays where it is and no
    /// request should be made.
    pub fn fail_precondition(&mut self, message: impl Into<String>) {
        if self.phase == Phase::Idle {
            self.last_error = Some(PaginationError::Precondition(message.into()));
        }
    }

    /// Applies the outcome of the request started by [`Pagination::begin`]
    /// and returns the cards to append, in response order.
    pub fn finish(
        &mut self,
        outcome: Result<PageResult, PageError>,
    ) -> Result<Vec<CardView>, PaginationError> {
        if self.phase != Phase::Loading {
            return Err(PaginationError::NotLoading(self.phase));
        }

        match outcome {
            Ok(page) => {
                self.phase = if page.has_more {
                    Phase::Idle
                } else {
                    Phase::Exhausted
                };
                self.pages_loaded += 1;
                self.cards_appended += page.results.len();
                Ok(self.style.render_page(&page.results))
            }
            Err(error) => {
                self.phase = if error.is_retryable() || self.policy == FailurePolicy::Retry {
                    Phase::Idle
                } else {
                    Phase::Halted
                };
                self.last_error = Some(PaginationError::Page(error));
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wotd_api::WordEntry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn entry(word: &str, date: &str) -> WordEntry {
        WordEntry {
            word: word.to_owned(),
            ipa: "/ɪˈfɛmərəl/".to_owned(),
            pos: "adjective".to_owned(),
            definition: "lasting a short time".to_owned(),
            date: date.to_owned(),
        }
    }

    fn page(has_more: bool, results: Vec<WordEntry>) -> Result<PageResult, PageError> {
        Ok(PageResult { has_more, results })
    }

    fn last_card_of(cards: &[CardView]) -> Option<CardDate> {
        cards.last().map(|card| CardDate {
            attribute: Some(card.raw_date.clone()),
            text: card.display_date.clone(),
        })
    }

    #[test]
    fn first_page_from_empty_list() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        assert!(pagination.control_visible());

        let cursor = pagination.begin(None, today()).unwrap();
        assert_eq!(cursor.as_str(), "2026-10-16");
        assert_eq!(pagination.phase(), Phase::Loading);
        assert!(!pagination.control_visible());

        let cards = pagination
            .finish(page(true, vec![entry("ephemeral", "2024-03-05")]))
            .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].word, "Ephemeral");
        assert_eq!(cards[0].display_date, "March 5th, 2024");
        assert_eq!(cards[0].raw_date, "2024-03-05");
        assert!(pagination.control_visible());
    }

    #[test]
    fn next_cursor_comes_from_last_appended_card() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.begin(None, today()).unwrap();
        let cards = pagination
            .finish(page(
                true,
                vec![entry("b", "2024-03-05"), entry("a", "2024-03-04")],
            ))
            .unwrap();

        let cursor = pagination
            .begin(last_card_of(&cards).as_ref(), today())
            .unwrap();
        assert_eq!(cursor.as_str(), "2024-03-04");
    }

    #[test]
    fn exhausted_page_removes_control_for_good() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.begin(None, today()).unwrap();
        let cards = pagination
            .finish(page(false, vec![entry("first", "2020-01-01")]))
            .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(pagination.phase(), Phase::Exhausted);
        assert!(!pagination.control_visible());
        assert_eq!(
            pagination.begin(None, today()),
            Err(PaginationError::NotIdle(Phase::Exhausted))
        );
    }

    #[test]
    fn server_rendered_exhaustion_starts_without_control() {
        let pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, false);
        assert_eq!(pagination.phase(), Phase::Exhausted);
        assert!(!pagination.control_visible());
    }

    #[test]
    fn second_activation_while_loading_is_rejected() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.begin(None, today()).unwrap();
        assert_eq!(
            pagination.begin(None, today()),
            Err(PaginationError::NotIdle(Phase::Loading))
        );
    }

    #[test]
    fn finish_without_begin_is_rejected() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        assert_eq!(
            pagination.finish(page(true, vec![])),
            Err(PaginationError::NotLoading(Phase::Idle))
        );
        assert_eq!(pagination.pages_loaded(), 0);
    }

    #[test]
    fn network_failure_halts_by_default() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.begin(None, today()).unwrap();
        let cards = pagination
            .finish(Err(PageError::Transport("connection refused".to_owned())))
            .unwrap();

        assert!(cards.is_empty());
        assert_eq!(pagination.phase(), Phase::Halted);
        assert!(!pagination.control_visible());
        assert!(!pagination.is_retry());
        assert_eq!(
            pagination.last_error(),
            Some(&PaginationError::Page(PageError::Transport(
                "connection refused".to_owned()
            )))
        );
        assert_eq!(pagination.cards_appended(), 0);
    }

    #[test]
    fn failure_is_retryable_under_retry_policy() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Retry, true);
        pagination.begin(None, today()).unwrap();
        pagination
            .finish(Err(PageError::Status {
                status: 500,
                message: "An error occurred while querying previous words".to_owned(),
            }))
            .unwrap();

        assert!(pagination.control_visible());
        assert!(pagination.is_retry());

        pagination.begin(None, today()).unwrap();
        assert!(pagination.last_error().is_none());
    }

    #[test]
    fn timeout_always_returns_to_idle() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.begin(None, today()).unwrap();
        pagination.finish(Err(PageError::Timeout)).unwrap();

        assert_eq!(pagination.phase(), Phase::Idle);
        assert!(pagination.is_retry());
    }

    #[test]
    fn unreadable_last_card_keeps_control() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        let broken = CardDate {
            attribute: None,
            text: "sometime".to_owned(),
        };

        assert!(matches!(
            pagination.begin(Some(&broken), today()),
            Err(PaginationError::Cursor(_))
        ));
        assert_eq!(pagination.phase(), Phase::Idle);
        assert!(pagination.control_visible());
        assert!(!pagination.is_retry());
        assert!(pagination.last_error().is_some());
    }

    #[test]
    fn missing_date_element_is_recorded_and_keeps_control() {
        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        pagination.fail_precondition("no .wotd-date in the last .wotd-card");

        assert_eq!(pagination.phase(), Phase::Idle);
        assert!(pagination.control_visible());
        assert!(!pagination.is_retry());
        assert_eq!(
            pagination.last_error(),
            Some(&PaginationError::Precondition(
                "no .wotd-date in the last .wotd-card".to_owned()
            ))
        );

        pagination.begin(None, today()).unwrap();
        assert!(pagination.last_error().is_none());
        pagination.fail_precondition("ignored while loading");
        assert!(pagination.last_error().is_none());
    }

    #[test]
    fn card_count_is_sum_of_pages_in_order() {
        let pages = [
            vec![entry("f", "2024-03-06"), entry("e", "2024-03-05")],
            vec![],
            vec![
                entry("d", "2024-03-04"),
                entry("d", "2024-03-04"),
                entry("c", "2024-03-03"),
            ],
            vec![entry("b", "2024-03-02")],
        ];
        let expected = pages.iter().map(Vec::len).sum::<usize>();

        let mut pagination = Pagination::new(CardStyle::default(), FailurePolicy::Halt, true);
        let mut rendered: Vec<CardView> = Vec::new();
        for (idx, results) in pages.iter().enumerate() {
            let has_more = idx + 1 < pages.len();
            pagination
                .begin(last_card_of(&rendered).as_ref(), today())
                .unwrap();
            rendered.extend(pagination.finish(page(has_more, results.clone())).unwrap());
            assert_eq!(pagination.control_visible(), has_more);
        }

        assert_eq!(rendered.len(), expected);
        assert_eq!(pagination.cards_appended(), expected);
        assert_eq!(pagination.pages_loaded(), pages.len());
        let words = rendered.iter().map(|c| c.word.as_str()).collect::<Vec<_>>();
        assert_eq!(words, ["F", "E", "D", "D", "C", "B"]);
    }
}

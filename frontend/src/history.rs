use leptos::prelude::*;
use wotd_core::{CardView, Pagination, SiteConfig};

use crate::{api, dom};

/// "Load more" tail of the word history list. Mounted at the end of the
/// server-rendered container, so cards it renders follow the seeded ones and
/// the next cursor is always read from whatever card is last on the page.
#[component]
pub fn WordHistory(config: SiteConfig, has_more: bool) -> impl IntoView {
    let pagination = RwSignal::new(Pagination::new(
        config.card_style(),
        config.failure_policy,
        has_more,
    ));
    let cards = RwSignal::new(Vec::<CardView>::new());
    let config = StoredValue::new(config);

    let load_more = move |_: web_sys::MouseEvent| {
        let Some(today) = dom::today() else {
            leptos::logging::error!("Could not determine today's date");
            pagination.write().fail_precondition("today's date is unavailable");
            return;
        };
        let last_card = match config
            .with_value(|c| dom::last_card_date(&c.card_selector, &c.card_date_selector))
        {
            Ok(card) => card,
            Err(e) => {
                leptos::logging::error!("Could not read the last word card: {}", e);
                pagination.write().fail_precondition(e.to_string());
                return;
            }
        };

        let begun = pagination.write().begin(last_card.as_ref(), today);
        let cursor = match begun {
            Ok(cursor) => cursor,
            Err(e) => {
                leptos::logging::error!("Not loading more words: {}", e);
                return;
            }
        };

        let (url, timeout) =
            config.with_value(|c| (c.endpoint("/api/query_previous"), c.page_timeout()));
        leptos::logging::log!("Loading words before {}", cursor);
        leptos::task::spawn_local(async move {
            let outcome = api::query_previous(&url, &cursor, timeout).await;
            if let Err(e) = &outcome {
                leptos::logging::error!("Error fetching previous words: {}", e);
            }

            let finished = pagination.write().finish(outcome);
            match finished {
                Ok(batch) => cards.write().extend(batch),
                Err(e) => leptos::logging::debug_warn!("Dropped page: {}", e),
            }
        });
    };

    let label = move || {
        if pagination.read().is_retry() {
            "Retry"
        } else {
            "Load More"
        }
    };

    let error_message = move || {
        let message = pagination.read().last_error().map(|e| e.to_string());
        message.map(|message| {
            view! {
                <p class="load-more-error" role="alert">
                    {format!("Could not load more words. {message}")}
                </p>
            }
        })
    };

    view! {
        <For
            each=move || cards.get().into_iter().enumerate()
            key=|(idx, _)| *idx
            children=move |(_, card)| view! { <WordCard card /> }
        />
        <Show when=move || pagination.read().control_visible()>
            <button
                id="load-more-button"
                type="button"
                class="button load-more-button"
                on:click=load_more
            >
                {label}
            </button>
        </Show>
        {error_message}
    }
}

#[component]
pub fn WordCard(
    card: CardView,
    #[prop(optional, into)] pronunciation_icon: Option<String>,
) -> impl IntoView {
    let CardView {
        word,
        ipa,
        pos,
        pos_class,
        definition,
        display_date,
        raw_date,
    } = card;

    view! {
        <section class="card wotd-card">
            <div class="wotd-header">
                <span class="wotd-word">{word}</span>
                <span class="wotd-ipa">
                    {ipa}
                    {pronunciation_icon
                        .map(|src| {
                            view! { <img src=src alt="Pronunciation" class="pronunciation" /> }
                        })}
                </span>
                <span class=format!("wotd-pos {pos_class}")>{pos}</span>
            </div>
            <p class="wotd-definition">{definition}</p>
            <p class="wotd-date" data-date=raw_date>
                {display_date}
            </p>
        </section>
    }
}

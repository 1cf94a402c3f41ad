use leptos::prelude::*;
use wotd_api::{WordEntry, Wotd};
use wotd_core::SiteConfig;

use crate::{api, history::WordCard};

#[component]
pub fn TodaysWord(config: SiteConfig) -> impl IntoView {
    let style = config.card_style();
    let source = config.wotd_date_format;
    let url = config.endpoint("/api/wotd");
    let icon = format!("{}/svg/pronunciation.svg", config.asset_base.trim_end_matches('/'));
    let wotd = LocalResource::new(move || api::get_json::<Wotd>(url.clone()));

    view! {
        <Suspense fallback=move || view! { <p>"Loading ..."</p> }>
            {move || {
                let icon = icon.clone();
                Suspend::new(async move {
                    match wotd.await {
                        Ok(wotd) => {
                            let card = style.render_from(&WordEntry::from(wotd), source);
                            leptos::either::Either::Left(
                                view! { <WordCard card pronunciation_icon=icon /> },
                            )
                        }
                        Err(e) => {
                            leptos::logging::error!("Error fetching WOTD: {}", e);
                            leptos::either::Either::Right(
                                view! { <p class="wotd-error">"Could not load today's word."</p> },
                            )
                        }
                    }
                })
            }}
        </Suspense>
    }
}

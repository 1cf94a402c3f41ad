use std::time::Duration;

use chrono::NaiveTime;
use leptos::{leptos_dom::helpers::set_interval_with_handle, prelude::*};
use wotd_core::countdown;

use crate::dom;

/// Time left until the next word, refreshed every second.
#[component]
pub fn Countdown(release: NaiveTime) -> impl IntoView {
    let remaining = move || {
        dom::now_utc()
            .map(|now| countdown::format_remaining(countdown::until_release(now, release)))
            .unwrap_or_else(|| "--:--:--".to_owned())
    };
    let (text, set_text) = signal(remaining());

    match set_interval_with_handle(move || set_text.set(remaining()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => leptos::logging::error!("Failed to start countdown: {:?}", e),
    }

    view! { <span class="countdown-time">{text}</span> }
}

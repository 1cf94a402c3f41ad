use std::time::Duration;

use leptos::prelude::*;
use wotd_core::{Theme, ThemeSwitcher, theme::themed_icon_path};

use crate::dom;

const STORAGE_KEY: &str = "theme";

#[component]
pub fn ThemeToggle(cooldown: Duration, asset_base: String) -> impl IntoView {
    let (saved, set_saved, _) = leptos_use::storage::use_local_storage::<
        String,
        codee::string::FromToStringCodec,
    >(STORAGE_KEY.to_owned());

    let initial = saved
        .get_untracked()
        .parse::<Theme>()
        .unwrap_or_else(|_| Theme::from_preference(dom::prefers_light()));
    let switcher = RwSignal::new(ThemeSwitcher::new(initial));
    let asset_base = StoredValue::new(asset_base);

    apply(initial, &asset_base.read_value());
    set_saved.set(initial.to_string());

    let toggle = move |e: web_sys::MouseEvent| {
        let toggled = switcher.write().toggle(e.shift_key());
        let Some(theme) = toggled else {
            return;
        };
        leptos::logging::log!("Switching theme to {}", theme.as_str());
        apply(theme, &asset_base.read_value());
        set_saved.set(theme.to_string());
        set_timeout(move || switcher.write().cool_down(), cooldown);
    };

    let icon = move || {
        let theme = switcher.read().theme();
        asset_base
            .with_value(|base| themed_icon_path(base, theme, "theme-toggle.svg"))
            .unwrap_or_default()
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label="toggle theme"
            disabled=move || switcher.read().is_cooling()
            on:click=toggle
        >
            <img
                src=icon
                alt=move || format!("{} theme", switcher.read().theme().as_str())
            />
        </button>
    }
}

fn apply(theme: Theme, asset_base: &str) {
    if let Err(e) = dom::apply_theme(theme, asset_base) {
        leptos::logging::error!("Failed to apply theme {}: {}", theme.as_str(), e);
    }
}

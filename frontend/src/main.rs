use leptos::prelude::*;
use leptos_router::components::Router;
use wotd_core::SiteConfig;

mod api;
mod contact;
mod countdown;
mod discord;
mod dom;
mod error;
mod history;
mod management;
mod menu;
mod theme;
mod today;

use contact::ContactForm;
use countdown::Countdown;
use discord::DiscordSettings;
use history::WordHistory;
use management::AppendWord;
use theme::ThemeToggle;
use today::TodaysWord;

const CONFIG_ELEMENT: &str = "site-config";

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    mount_islands(config);
}

fn load_config() -> SiteConfig {
    let Some(raw) = dom::text_of(CONFIG_ELEMENT) else {
        leptos::logging::log!("No #{} element, using default config", CONFIG_ELEMENT);
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        leptos::logging::error!("{}; using default config", e);
        SiteConfig::default()
    })
}

/// Mounts every component whose mount point exists on the current page.
fn mount_islands(config: SiteConfig) {
    if dom::mount_point(wotd_core::menu::MENU_ID).is_some() {
        menu::install();
    }

    if let Some(container) = dom::mount_point("wotd-history") {
        let has_more = container
            .get_attribute("data-has-more")
            .is_none_or(|value| value != "false");
        // The component renders its own control.
        dom::remove_by_id("load-more-button");

        let config = config.clone();
        mount(container, move || {
            view! { <WordHistory config has_more /> }
        });
    }

    if let Some(target) = dom::mount_point("wotd-today") {
        let config = config.clone();
        mount(target, move || view! { <TodaysWord config /> });
    }

    if let Some(target) = dom::mount_point("countdown") {
        let release = config.release_time;
        mount(target, move || view! { <Countdown release /> });
    }

    if let Some(target) = dom::mount_point("theme-toggle-root") {
        let cooldown = config.theme_cooldown();
        let asset_base = config.asset_base.clone();
        mount(target, move || {
            view! { <ThemeToggle cooldown asset_base /> }
        });
    }

    if let Some(target) = dom::mount_point("contact-form-root") {
        let endpoint = config.endpoint("/api/send-message");
        mount(target, move || view! { <ContactForm endpoint /> });
    }

    if let Some(target) = dom::mount_point("discord-settings-root") {
        let save_endpoint = config.endpoint("/api/discord_save_settings");
        let reset_endpoint = config.endpoint("/api/discord_reset_settings");
        let forget_endpoint = config.endpoint(&config.forget_endpoint);
        mount(target, move || {
            view! {
                <Router>
                    <DiscordSettings save_endpoint reset_endpoint forget_endpoint />
                </Router>
            }
        });
    }

    if let Some(target) = dom::mount_point("admin-append-word-root") {
        let endpoint = config.endpoint("/api/admin/append_word");
        mount(target, move || {
            view! {
                <Router>
                    <AppendWord endpoint />
                </Router>
            }
        });
    }
}

fn mount<F, N>(target: web_sys::HtmlElement, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::logging::log!("Mounting #{}", target.id());
    leptos::mount::mount_to(target, f).forget();
}

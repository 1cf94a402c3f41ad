use std::time::Duration;

use leptos::prelude::*;
use leptos_router::{hooks::use_query, params::Params};
use wotd_api::{DateStyle, SubscriberIdentity};
use wotd_core::settings::{self, SettingsForm};

use crate::{api, dom, error::AppError};

/// Query string of the configuration link the bot sends.
#[derive(Debug, PartialEq, Params, Clone)]
struct ConfigLink {
    user_id: Option<String>,
    guild_id: Option<String>,
    channel_id: Option<String>,
    token: Option<String>,
}

impl From<ConfigLink> for SubscriberIdentity {
    fn from(link: ConfigLink) -> Self {
        Self {
            user_id: link.user_id,
            guild_id: link.guild_id,
            channel_id: link.channel_id,
            token: link.token,
        }
    }
}

const TIMEZONES: [&str; 12] = [
    "UTC",
    "Europe/London",
    "Europe/Berlin",
    "Europe/Moscow",
    "Asia/Kolkata",
    "Asia/Shanghai",
    "Asia/Tokyo",
    "Australia/Sydney",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
];

#[derive(Clone)]
struct Endpoints {
    save: String,
    reset: String,
    forget: String,
}

#[component]
pub fn DiscordSettings(
    save_endpoint: String,
    reset_endpoint: String,
    forget_endpoint: String,
) -> impl IntoView {
    let link = use_query::<ConfigLink>();
    let identity = move || {
        link.get()
            .map(SubscriberIdentity::from)
            .unwrap_or_default()
    };
    let endpoints = StoredValue::new(Endpoints {
        save: save_endpoint,
        reset: reset_endpoint,
        forget: forget_endpoint,
    });

    let defaults = SettingsForm::default();
    let (timezone, set_timezone) = signal(defaults.timezone);
    let (time, set_time) = signal(defaults.time);
    let (include_date, set_include_date) = signal(defaults.include_date);
    let (include_ipa, set_include_ipa) = signal(defaults.include_ipa);
    let (display_dmy, set_display_dmy) = signal(defaults.display_dmy);
    let (silent_message, set_silent_message) = signal(defaults.silent_message);
    let (date_style, set_date_style) = signal(defaults.date_style);

    let current_form = move || SettingsForm {
        timezone: timezone.get(),
        time: time.get(),
        include_date: include_date.get(),
        include_ipa: include_ipa.get(),
        display_dmy: display_dmy.get(),
        silent_message: silent_message.get(),
        date_style: date_style.get(),
    };

    let restore_defaults = move || {
        let SettingsForm {
            timezone,
            time,
            include_date,
            include_ipa,
            display_dmy,
            silent_message,
            date_style,
        } = SettingsForm::default();
        set_timezone.set(timezone);
        set_time.set(time);
        set_include_date.set(include_date);
        set_include_ipa.set(include_ipa);
        set_display_dmy.set(display_dmy);
        set_silent_message.set(silent_message);
        set_date_style.set(date_style);
    };

    let save = move |e: web_sys::SubmitEvent| {
        e.prevent_default();

        let request = match current_form().to_request(identity()) {
            Ok(request) => request,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };
        let url = endpoints.with_value(|e| e.save.clone());
        leptos::task::spawn_local(async move {
            match api::post_for_status(&url, &request).await {
                Ok(()) => dom::alert("Settings saved successfully!"),
                Err(e) => report("save settings", e),
            }
        });
    };

    let reset = move |_: web_sys::MouseEvent| {
        let identity = identity();
        if let Err(e) = settings::require_token(&identity) {
            dom::alert(&e.to_string());
            return;
        }
        restore_defaults();

        let url = endpoints.with_value(|e| e.reset.clone());
        leptos::task::spawn_local(async move {
            match api::post_for_status(&url, &identity).await {
                Ok(()) => dom::alert("Settings have been reset to default values."),
                Err(e) => report("reset settings", e),
            }
        });
    };

    let forget = move |_: web_sys::MouseEvent| {
        let identity = identity();
        if let Err(e) = settings::require_token(&identity) {
            dom::alert(&e.to_string());
            return;
        }
        if !dom::confirm(
            "Are you sure you want to unsubscribe and delete all your data? This action cannot be undone.",
        ) {
            return;
        }

        let url = endpoints.with_value(|e| e.forget.clone());
        leptos::task::spawn_local(async move {
            match api::post_for_status(&url, &identity).await {
                Ok(()) => {
                    dom::alert(
                        "Your data has been deleted. You will no longer receive Word of the Day messages.",
                    );
                    set_timeout(|| dom::redirect("/"), Duration::from_secs(2));
                }
                Err(e) => report("delete data", e),
            }
        });
    };

    let date_styles = DateStyle::ALL
        .into_iter()
        .map(|style| {
            view! {
                <label class="radio-label">
                    <input
                        type="radio"
                        name="date-format"
                        value=style.as_str()
                        prop:checked=move || date_style.get() == style
                        on:change=move |_| set_date_style.set(style)
                    />
                    {style.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <form id="settings-form" class="settings-form" on:submit=save>
            <label for="timezone-select">Timezone</label>
            <input
                id="timezone-select"
                type="text"
                list="timezones"
                bind:value=(timezone, set_timezone)
            />
            <datalist id="timezones">
                {TIMEZONES.into_iter().map(|tz| view! { <option value=tz></option> }).collect_view()}
            </datalist>

            <label for="time-single">Delivery time</label>
            <input id="time-single" type="time" bind:value=(time, set_time) />

            <label>
                <input
                    type="checkbox"
                    name="include-date"
                    bind:checked=(include_date, set_include_date)
                />
                "Include date"
            </label>
            <label>
                <input
                    type="checkbox"
                    name="include-ipa"
                    bind:checked=(include_ipa, set_include_ipa)
                />
                "Include IPA"
            </label>
            <label>
                <input type="checkbox" name="is-dmy" bind:checked=(display_dmy, set_display_dmy) />
                "Day before month"
            </label>
            <label>
                <input
                    type="checkbox"
                    name="silent-mode"
                    bind:checked=(silent_message, set_silent_message)
                />
                "Silent messages"
            </label>

            <fieldset class="date-format">
                <legend>Date format</legend>
                {date_styles}
            </fieldset>

            <div class="settings-actions">
                <button type="submit" class="button">
                    Save
                </button>
                <button type="button" class="button" on:click=reset>
                    Reset
                </button>
                <button type="button" class="button button-danger" on:click=forget>
                    Forget me
                </button>
            </div>
        </form>
    }
}

fn report(action: &str, error: AppError) {
    match error {
        AppError::Rejected(reason) => dom::alert(&format!("Failed to {action}: {reason}")),
        e => {
            leptos::logging::error!("Error trying to {}: {}", action, e);
            dom::alert(&format!("An error occurred while trying to {action}."));
        }
    }
}

use leptos::prelude::*;
use leptos_router::{
    hooks::use_query,
    params::{Params, ParamsError},
};
use wotd_core::forms::AppendWordForm;

use crate::{api, dom, error::AppError};

#[derive(Debug, PartialEq, Params, Clone)]
struct AdminAccess {
    password: Option<String>,
}

fn password(access: Result<AdminAccess, ParamsError>) -> String {
    access.ok().and_then(|a| a.password).unwrap_or_default()
}

/// Admin page form that schedules a new word.
#[component]
pub fn AppendWord(endpoint: String) -> impl IntoView {
    let access = use_query::<AdminAccess>();
    let (word, set_word) = signal(String::new());
    let (ipa, set_ipa) = signal(String::new());
    let (pos, set_pos) = signal(String::new());
    let (definition, set_definition) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let endpoint = StoredValue::new(endpoint);

    let submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();

        let form = AppendWordForm {
            word: word.get(),
            ipa: ipa.get(),
            pos: pos.get(),
            definition: definition.get(),
            date: date.get(),
        };
        let request = match form.to_request(&password(access.get())) {
            Ok(request) => request,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };

        let url = endpoint.get_value();
        leptos::task::spawn_local(async move {
            match api::post_for_status(&url, &request).await {
                Ok(()) => {
                    dom::alert("Word appended successfully!");
                    set_word.set(String::new());
                    set_ipa.set(String::new());
                    set_pos.set(String::new());
                    set_definition.set(String::new());
                    set_date.set(String::new());
                }
                Err(AppError::Rejected(reason)) => {
                    dom::alert(&format!("Failed to append word: {reason}"));
                }
                Err(e) => {
                    leptos::logging::error!("Error appending WOTD entry: {}", e);
                    dom::alert("An error occurred while appending the word.");
                }
            }
        });
    };

    view! {
        <form id="append-word-form" on:submit=submit>
            <input id="word-input" type="text" placeholder="Word" bind:value=(word, set_word) />
            <input id="ipa-input" type="text" placeholder="IPA" bind:value=(ipa, set_ipa) />
            <input
                id="pos-input"
                type="text"
                placeholder="Part of speech"
                bind:value=(pos, set_pos)
            />
            <textarea
                id="definition-input"
                placeholder="Definition"
                bind:value=(definition, set_definition)
            ></textarea>
            <input id="date-input" type="date" bind:value=(date, set_date) />
            <button type="submit" class="button">
                Append word
            </button>
        </form>
    }
}

use leptos::prelude::*;
use wotd_core::forms;

use crate::{api, dom};

#[component]
pub fn ContactForm(endpoint: String) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let endpoint = StoredValue::new(endpoint);

    let submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();

        let contact = match forms::contact_message(
            &name.read(),
            &email.read(),
            &subject.read(),
            &message.read(),
        ) {
            Ok(contact) => contact,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };

        let url = endpoint.get_value();
        leptos::task::spawn_local(async move {
            match api::post_json(&url, &contact).await {
                Ok(resp) if resp.ok() => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    dom::alert("Message sent successfully!");
                }
                Ok(resp) => {
                    leptos::logging::warn!("Contact message rejected with status {}", resp.status());
                    dom::alert("Failed to send message. Please try again later.");
                }
                Err(e) => {
                    leptos::logging::error!("Error sending contact message: {}", e);
                    dom::alert("An error occurred while sending the message.");
                }
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=submit>
            <input type="text" name="name" placeholder="Name" bind:value=(name, set_name) />
            <input
                type="email"
                name="email"
                placeholder="Email"
                required
                bind:value=(email, set_email)
            />
            <input
                type="text"
                name="subject"
                placeholder="Subject"
                required
                bind:value=(subject, set_subject)
            />
            <textarea
                name="message"
                placeholder="Message"
                required
                bind:value=(message, set_message)
            ></textarea>
            <button type="submit" class="button">
                Send
            </button>
        </form>
    }
}

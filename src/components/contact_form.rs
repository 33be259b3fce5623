//! Contact Form Component
//!
//! Three-field form posting to the mail relay. Success shows the relay's
//! confirmation and clears the form; failure shows a fixed notice and
//! keeps everything the user typed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::ContactDraft;

/// Fixed failure notice; the error body itself is never shown
const SUBMIT_FAILURE_NOTICE: &str = "Sorry, your message could not be sent. Please try again.";

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(ContactDraft::default());
    let (sending, set_sending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        // Inputs are marked required; this guard covers scripted submits
        if !current.is_complete() || sending.get() {
            return;
        }
        set_sending.set(true);

        spawn_local(async move {
            match api::send_email(&current.to_message()).await {
                Ok(confirmation) => {
                    ctx.show_notice(confirmation);
                    set_draft.set(ContactDraft::default());
                }
                Err(cause) => {
                    log::warn!("contact submission failed: {}", cause);
                    ctx.show_notice(SUBMIT_FAILURE_NOTICE);
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="contact">
            <h1>"Get in touch"</h1>
            <p>"Questions about a career path, or a correction to suggest? Send a message."</p>

            <form class="contact-form" on:submit=submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.update(|draft| draft.name = input.value());
                        }
                    />
                </label>

                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || draft.get().email
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.update(|draft| draft.email = input.value());
                        }
                    />
                </label>

                <label>
                    "Message"
                    <textarea
                        rows="6"
                        required
                        prop:value=move || draft.get().message
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_draft.update(|draft| draft.message = area.value());
                        }
                    ></textarea>
                </label>

                <button type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}

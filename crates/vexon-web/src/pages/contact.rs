//! Contact Page

use leptos::prelude::*;
use vexon_core::ContactForm;

use crate::api::{use_client, Notice};
use crate::components::{require_captcha, Captcha, StatusLine};

/// Address pinned on the contact map
const BASE_ADDRESS: &str = "SF-01 Base, California";

#[component]
pub fn ContactPage() -> impl IntoView {
    let client = use_client();
    let form = RwSignal::new(ContactForm::default());
    let (sending, set_sending) = signal(false);
    let notice = RwSignal::new(None::<Notice>);
    let map_url = RwSignal::new(None::<String>);

    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let resp = client.get_map_pin(BASE_ADDRESS).await;
            let url = resp
                .success_data()
                .and_then(|data| data["embed_url"].as_str())
                .map(String::from);
            map_url.set(url);
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let captcha = match require_captcha(client.config()) {
            Ok(token) => token,
            Err(n) => {
                notice.set(Some(n));
                return;
            }
        };

        set_sending.set(true);
        let client = client.clone();
        let mut payload = form.get_untracked();
        payload.captcha_token = captcha;
        leptos::task::spawn_local(async move {
            let resp = client.submit_contact_form(&payload).await;
            set_sending.set(false);
            if resp.is_success() {
                notice.set(Some(Notice::ok("Packet received. Transmission complete.")));
                form.set(ContactForm::default());
            } else {
                notice.set(Some(Notice::from_envelope(&resp, "Transmission failed.")));
            }
        });
    };

    view! {
        <div class="contact">
            <h1>"Open a channel"</h1>

            <form on:submit=submit>
                <div class="field">
                    <label>"Name"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Message"</label>
                    <textarea
                        required
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    />
                </div>
                <Captcha />
                <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Transmitting..." } else { "Send Message" }}
                </button>
            </form>
            <StatusLine notice=notice />

            <section class="map">
                {move || match map_url.get() {
                    Some(url) => view! {
                        <iframe src=url title="Vexon base location"></iframe>
                    }
                    .attr("loading", "lazy")
                    .into_any(),
                    None => view! { <p class="map-placeholder">{BASE_ADDRESS}</p> }.into_any(),
                }}
            </section>
        </div>
    }
}

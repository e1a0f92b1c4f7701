//! Forgot Password Page

use leptos::prelude::*;

use crate::api::{use_client, Notice};
use crate::components::StatusLine;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = use_client();
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let notice = RwSignal::new(None::<Notice>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        let client = client.clone();
        let email = email.get_untracked();
        leptos::task::spawn_local(async move {
            let resp = client.forgot_password(&email).await;
            set_loading.set(false);
            notice.set(Some(if resp.is_success() {
                Notice::ok("Reset pulse broadcasted. Check your address.")
            } else {
                Notice::from_envelope(&resp, "Protocol rejection.")
            }));
        });
    };

    view! {
        <div class="auth">
            <h1>"Recover access"</h1>
            <form on:submit=submit>
                <div class="field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Broadcasting..." } else { "Send Reset Link" }}
                </button>
            </form>
            <StatusLine notice=notice />
            <p class="switch"><a href="/login">"Back to sign in"</a></p>
        </div>
    }
}

//! Signup Page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use vexon_core::SignupForm;

use crate::api::{use_auth, use_client, Notice};
use crate::components::{require_captcha, Captcha, OAuthButtons, StatusLine};

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let (loading, set_loading) = signal(false);
    let notice = RwSignal::new(None::<Notice>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let captcha = match require_captcha(client.config()) {
            Ok(token) => token,
            Err(n) => {
                notice.set(Some(n));
                return;
            }
        };

        set_loading.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        let form = form.get_untracked();
        leptos::task::spawn_local(async move {
            let resp = client.signup(&form, captcha.as_deref()).await;
            set_loading.set(false);
            notice.set(Some(Notice::from_envelope(&resp, "Entity registered in the database.")));
            if resp.is_success() {
                auth.refresh(&client);
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth">
            <h1>"Create your identity"</h1>
            <OAuthButtons />

            <form on:submit=submit>
                <div class="field-row">
                    <div class="field">
                        <label>"First name"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Last name"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label>"Username"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
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
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <Captcha />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Registering..." } else { "Sign Up" }}
                </button>
            </form>

            <StatusLine notice=notice />
            <p class="switch">"Already registered? " <a href="/login">"Sign in"</a></p>
        </div>
    }
}

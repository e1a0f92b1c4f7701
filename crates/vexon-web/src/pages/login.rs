//! Login Page

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use vexon_core::guard::return_path;

use crate::api::{use_auth, use_client, Notice};
use crate::components::{require_captcha, Captcha, OAuthButtons, StatusLine};

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
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
        let destination = return_path(query.get_untracked().get("from").as_deref());

        set_loading.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        leptos::task::spawn_local(async move {
            let resp = client.login(&email, &password, captcha.as_deref()).await;
            set_loading.set(false);
            notice.set(Some(Notice::from_envelope(&resp, "Connection established.")));
            if resp.is_success() {
                auth.refresh(&client);
                navigate(&destination, NavigateOptions { replace: true, ..Default::default() });
            }
        });
    };

    view! {
        <div class="auth">
            <h1>"Welcome back"</h1>
            <OAuthButtons />

            <form on:submit=submit>
                <div class="field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required
                        placeholder="operator@vexon.ai"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <a href="/forgot-password" class="hint">"Lost Key?"</a>
                </div>
                <Captcha />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Connecting..." } else { "Sign In" }}
                </button>
            </form>

            <StatusLine notice=notice />
            <p class="switch">"No account? " <a href="/signup">"Sign up"</a></p>
        </div>
    }
}

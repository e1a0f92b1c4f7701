//! UI Components

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect, A};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use vexon_client::{ClientConfig, OAuthProvider};
use vexon_core::{guard, Access, ChatMessage, Transcript};
use wasm_bindgen::JsCast;

use crate::api::{use_auth, use_client, Notice};
use crate::storage::{self, LocalStorageSessionStore};

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
        </div>
    }
}

/// Status line standing in for toasts
#[component]
pub fn StatusLine(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.ok { "status status-ok" } else { "status status-error" };
            view! { <p class=class>{n.text}</p> }
        })
    }
}

/// CAPTCHA widget, rendered only when a site key is configured
#[component]
pub fn Captcha() -> impl IntoView {
    let site_key = use_client().config().captcha_site_key.clone();
    site_key.map(|key| view! { <div class="cf-turnstile" data-sitekey=key></div> })
}

/// Token the CAPTCHA widget left in the page, if any
pub fn captcha_token() -> Option<String> {
    let input = document()
        .query_selector("input[name='cf-turnstile-response']")
        .ok()
        .flatten()?;
    let value = input.dyn_into::<web_sys::HtmlInputElement>().ok()?.value();
    (!value.is_empty()).then_some(value)
}

/// CAPTCHA token for a form submission.
///
/// Fails with a notice when the widget is configured but not yet solved.
pub fn require_captcha(config: &ClientConfig) -> Result<Option<String>, Notice> {
    let token = captcha_token();
    if config.captcha_site_key.is_some() && token.is_none() {
        return Err(Notice::error("Please complete the neural handshake (CAPTCHA)."));
    }
    Ok(token)
}

/// Provider sign-in links; the backend handles the redirect dance
#[component]
pub fn OAuthButtons() -> impl IntoView {
    let client = use_client();

    view! {
        <div class="oauth">
            {[OAuthProvider::Google, OAuthProvider::GitHub]
                .into_iter()
                .map(|provider| view! {
                    <a class="btn btn-oauth" href=client.oauth_redirect_url(provider)>
                        {format!("Continue with {}", provider.label())}
                    </a>
                })
                .collect_view()}
        </div>
    }
}

/// Renders its children only with a stored session.
///
/// The check runs once, when the route renders; without a session the user
/// is sent to the login page with the current location in `from`.
#[component]
pub fn ProtectedRoute(children: Children) -> impl IntoView {
    let client = use_client();
    let location = use_location();
    let here = format!(
        "{}{}",
        location.pathname.get_untracked(),
        location.search.get_untracked()
    );
    let store = LocalStorageSessionStore::new(client.config().session_key.clone());

    match guard(&store, &here) {
        Access::Granted(_) => children().into_any(),
        Access::Redirect(redirect) => view! {
            <Redirect
                path=redirect.target()
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_any(),
    }
}

/// Sidebar and top bar around dashboard pages
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        let resp = client.logout();
        if !resp.is_success() {
            tracing::warn!("Logout incomplete: {}", resp.message);
        }
        auth.0.set(None);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <a href="/" class="logo">"VEXON"</a>
                <nav>
                    <A href="/dashboard">"Overview"</A>
                    <A href="/dashboard/neural-lab">"Neural Lab"</A>
                    <A href="/dashboard/spectral-pro">"Spectral Pro"</A>
                    <A href="/dashboard/billing">"Billing"</A>
                    <A href="/dashboard/settings">"Settings"</A>
                </nav>
                <button class="btn logout" on:click=logout>"Logout"</button>
            </aside>

            <div class="dashboard-main">
                <header class="topbar">
                    {move || auth.0.get().map(|session| view! {
                        <div class="user">
                            <span class="name">{session.user.display_name()}</span>
                            <span class="plan">{session.user.plan_label().to_uppercase()}</span>
                        </div>
                    })}
                </header>
                <Outlet />
            </div>
        </div>
    }
}

/// Titled cards of the marketing pages
#[component]
pub fn CardGrid(cards: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <section class="card-grid">
            {cards
                .iter()
                .map(|(title, body)| view! {
                    <div class="card">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

/// Site-wide links to the static pages
#[component]
pub fn SiteFooter() -> impl IntoView {
    const LINKS: [(&str, &str); 7] = [
        ("/product", "Product"),
        ("/features", "Features"),
        ("/technology", "Technology"),
        ("/about", "About"),
        ("/contact", "Contact"),
        ("/privacy", "Privacy Policy"),
        ("/terms", "Terms of Service"),
    ];

    view! {
        <footer class="site-footer">
            <nav>
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
        </footer>
    }
}

/// Floating support chat
#[component]
pub fn ChatWidget() -> impl IntoView {
    let client = use_client();
    let (open, set_open) = signal(false);
    let transcript = RwSignal::new(Transcript::new());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let send = move || {
        if loading.get_untracked() {
            return;
        }
        let message = input.get_untracked();
        let Some(history) = transcript.try_update(|t| t.begin_turn(&message)).flatten() else {
            return;
        };

        set_input.set(String::new());
        set_loading.set(true);

        let client = client.clone();
        leptos::task::spawn_local(async move {
            let resp = client.generate_chat(&history).await;
            transcript.update(|t| t.finish_turn(resp.success_data().map(|r| r.response.clone())));
            set_loading.set(false);
        });
    };
    let send_key = send.clone();

    view! {
        <div class="chat-widget">
            <Show when=move || open.get()>
                <div class="chat-panel">
                    <header>
                        <span>"Vexon Support"</span>
                        <button on:click=move |_| set_open.set(false)>"×"</button>
                    </header>
                    <div class="messages">
                        <For
                            each=move || transcript.with(|t| {
                                t.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                            })
                            key=|(i, _)| *i
                            children=|(_, msg)| view! { <MessageBubble message=msg /> }
                        />
                        <Show when=move || loading.get()>
                            <div class="message loading">"..."</div>
                        </Show>
                    </div>
                    <div class="input-area">
                        <input
                            type="text"
                            placeholder="Transmit a query..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown={
                                let send = send_key.clone();
                                move |ev| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        send();
                                    }
                                }
                            }
                        />
                        <button
                            on:click={
                                let send = send.clone();
                                move |_| send()
                            }
                            disabled=move || loading.get()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>

            <button class="chat-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Close" } else { "Support" }}
            </button>
        </div>
    }
}

/// Cookie banner shown until acknowledged
#[component]
pub fn CookieConsent() -> impl IntoView {
    let (visible, set_visible) = signal(!storage::cookie_consent_given());

    let accept = move |_| {
        storage::give_cookie_consent();
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="cookie-consent">
                <h4>"Neural Cookie Protocol"</h4>
                <p>
                    "We use encrypted identifiers to optimize your neural synthesis "
                    "experience and maintain session stability."
                </p>
                <button class="btn btn-primary" on:click=accept>"Acknowledge"</button>
                <button class="btn" on:click=move |_| set_visible.set(false)>"Decline"</button>
            </div>
        </Show>
    }
}

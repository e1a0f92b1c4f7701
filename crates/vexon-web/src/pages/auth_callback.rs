//! OAuth Callback Page

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use vexon_client::CallbackParams;

use crate::api::{use_auth, use_client, Notice};
use crate::components::StatusLine;

/// Landing route of the provider redirect: `?token=…&provider=…[&error=…]`
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map().get_untracked();
    let notice = RwSignal::new(None::<Notice>);

    let params = CallbackParams::from_lookup(|key| query.get(key));
    leptos::task::spawn_local(async move {
        let resp = client.complete_oauth(params).await;
        notice.set(Some(Notice::from_envelope(&resp, "Neural connection established.")));
        let destination = if resp.is_success() {
            auth.refresh(&client);
            "/dashboard"
        } else {
            "/login"
        };
        navigate(destination, NavigateOptions { replace: true, ..Default::default() });
    });

    view! {
        <div class="auth callback">
            <p>"Synchronizing identity..."</p>
            <StatusLine notice=notice />
        </div>
    }
}

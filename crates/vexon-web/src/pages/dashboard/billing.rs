//! Billing Page

use leptos::prelude::*;
use leptos_router::components::A;
use vexon_core::Plan;

use crate::api::{use_auth, use_client, Notice};
use crate::components::StatusLine;

#[component]
pub fn BillingPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();

    let plans = RwSignal::new(Vec::<Plan>::new());
    let (loading, set_loading) = signal(true);
    let notice = RwSignal::new(None::<Notice>);

    leptos::task::spawn_local(async move {
        let resp = client.get_plans().await;
        if resp.is_success() {
            plans.set(resp.data.unwrap_or_default());
        } else {
            notice.set(Some(Notice::from_envelope(&resp, "Failed to load billing data.")));
        }
        set_loading.set(false);
    });

    let current_plan = move || {
        auth.0
            .get()
            .map(|s| s.user.plan_label().to_string())
            .unwrap_or_else(|| "basic".into())
    };

    view! {
        <div class="billing">
            <section class="current-plan">
                <h1>"Billing"</h1>
                <p>
                    "Your identity is currently synchronized with the "
                    <strong>{current_plan}</strong>
                    " processing cluster."
                </p>
            </section>

            <StatusLine notice=notice />
            <Show when=move || loading.get()>
                <p class="loading">"Loading clusters..."</p>
            </Show>

            <section class="plans">
                <For
                    each=move || plans.get()
                    key=|plan| plan.slug.clone()
                    children=move |plan| {
                        let checkout = format!("/dashboard/checkout/{}", plan.slug);
                        let slug = plan.slug.clone();
                        let is_current = move || current_plan() == slug;
                        view! {
                            <div class="plan">
                                <h2>{plan.name.clone()}</h2>
                                <div class="price">{format!("${}", plan.price)}<span>"/month"</span></div>
                                {plan.description.clone().map(|d| view! { <p>{d}</p> })}
                                <ul>
                                    <li>"Spectral Filtering"</li>
                                    <li>"Neural Synth v1.4"</li>
                                    {(!plan.is_free()).then(|| view! {
                                        <li>"Full Architecture Access"</li>
                                        <li>"Zero-Latency Routing"</li>
                                    })}
                                </ul>
                                {move || if is_current() {
                                    view! { <button class="btn" disabled=true>"Current Plan"</button> }.into_any()
                                } else {
                                    view! { <A href=checkout.clone() attr:class="btn">"Select Plan"</A> }.into_any()
                                }}
                            </div>
                        }
                    }
                />
            </section>
        </div>
    }
}

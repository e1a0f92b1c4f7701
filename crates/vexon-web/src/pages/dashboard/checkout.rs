//! Checkout Page

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use vexon_core::{format_card_number, CardDetails};

use crate::api::{use_auth, use_client, Notice};
use crate::components::StatusLine;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug")).unwrap_or_else(|| "pro".into());

    let card = RwSignal::new(CardDetails::default());
    let (processing, set_processing) = signal(false);
    let notice = RwSignal::new(None::<Notice>);

    let pay = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }
        let details = card.get_untracked();
        if !details.is_accepted_test_card() {
            notice.set(Some(Notice::error(
                "Vocal authentication failed. Card pattern unrecognized by neural core.",
            )));
            return;
        }

        set_processing.set(true);
        notice.set(Some(Notice::ok("Sending encrypted packet to payment gateway...")));
        let plan = slug();
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let resp = client.subscribe(&plan, &details).await;
            set_processing.set(false);
            if resp.is_success() {
                auth.refresh(&client);
                notice.set(Some(Notice::ok(format!("Protocol elevation to {plan} complete."))));
                navigate("/dashboard/billing", NavigateOptions::default());
            } else {
                notice.set(Some(Notice::from_envelope(&resp, "Payment protocol rejected.")));
            }
        });
    };

    view! {
        <div class="checkout">
            <a href="/dashboard/billing" class="back">"Back to Clusters"</a>
            <h1>{move || format!("Upgrade to {}", slug().to_uppercase())}</h1>

            <form on:submit=pay>
                <div class="field">
                    <label>"Card holder"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || card.with(|c| c.card_holder.clone())
                        on:input=move |ev| card.update(|c| c.card_holder = event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Card number"</label>
                    <input
                        type="text"
                        required
                        maxlength="19"
                        placeholder="4242 4242 4242 4242"
                        prop:value=move || card.with(|c| c.card_number.clone())
                        on:input=move |ev| {
                            card.update(|c| c.card_number = format_card_number(&event_target_value(&ev)));
                        }
                    />
                </div>
                <div class="field-row">
                    <div class="field">
                        <label>"MM"</label>
                        <input
                            type="text"
                            required
                            maxlength="2"
                            prop:value=move || card.with(|c| c.expiry_month.clone())
                            on:input=move |ev| card.update(|c| c.expiry_month = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"YY"</label>
                        <input
                            type="text"
                            required
                            maxlength="2"
                            prop:value=move || card.with(|c| c.expiry_year.clone())
                            on:input=move |ev| card.update(|c| c.expiry_year = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"CVV"</label>
                        <input
                            type="password"
                            required
                            maxlength="4"
                            prop:value=move || card.with(|c| c.cvv.clone())
                            on:input=move |ev| card.update(|c| c.cvv = event_target_value(&ev))
                        />
                    </div>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || processing.get()>
                    {move || if processing.get() { "Processing..." } else { "Authorize Payment" }}
                </button>
            </form>

            <StatusLine notice=notice />
            <p class="hint">"Test cards: 4242 4242 4242 4242 or any number starting with 4111."</p>
        </div>
    }
}

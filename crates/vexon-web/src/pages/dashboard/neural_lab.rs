//! Neural Lab Page

use leptos::prelude::*;
use vexon_core::Generation;

use crate::api::{use_client, Notice};
use crate::components::StatusLine;

#[component]
pub fn NeuralLabPage() -> impl IntoView {
    let client = use_client();
    let (prompt, set_prompt) = signal(String::new());
    let (generating, set_generating) = signal(false);
    let result = RwSignal::new(None::<Generation>);
    let notice = RwSignal::new(None::<Notice>);

    let generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = prompt.get_untracked();
        if text.is_empty() || generating.get_untracked() {
            return;
        }

        set_generating.set(true);
        result.set(None);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let resp = client.generate_ai(&text).await;
            set_generating.set(false);
            if let Some(generation) = resp.success_data() {
                result.set(Some(generation.clone()));
                notice.set(Some(Notice::ok("Generation complete. Spectral data ready.")));
            } else {
                notice.set(Some(Notice::from_envelope(&resp, "Neural collapse. Try re-prompting.")));
            }
        });
    };

    view! {
        <div class="neural-lab">
            <header>
                <h1>"Neural Lab"</h1>
                <p>
                    "Convert semantic concepts into high-fidelity auditory buffers."
                </p>
            </header>

            <form on:submit=generate>
                <label>"Neural Prompt Injection"</label>
                <textarea
                    placeholder="e.g. Cinematic ambient texture with rhythmic quantum pulses..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || generating.get() || prompt.with(String::is_empty)
                >
                    {move || if generating.get() { "Synthesizing..." } else { "Initialize Synth" }}
                </button>
            </form>

            <StatusLine notice=notice />

            <Show when=move || generating.get()>
                <div class="synthesizing">"Synthesizing..."</div>
            </Show>

            {move || result.get().map(|g| view! {
                <div class="result">
                    <h3>{format!("Buffer #{}", g.id)}</h3>
                    <p class="prompt">{g.prompt}</p>
                    <p class="response">{g.response}</p>
                    <span class="tokens">{format!("{} tokens", g.tokens_used)}</span>
                </div>
            })}
        </div>
    }
}

//! Product Page

use leptos::prelude::*;

use crate::components::CardGrid;

const AUDIENCES: &[(&str, &str)] = &[
    ("Creators", "Generate voiceovers, enhance podcasts, add multilingual dubbing effortlessly."),
    ("Businesses", "Analyze call center audio, detect sentiment, ensure compliance automatically."),
    ("Agencies", "Scale audio production, deliver mastered content, streamline review workflows."),
];

const TRAITS: &[(&str, &str)] = &[
    ("Modular Pipeline", "Mix and match AI modules for your exact workflow."),
    ("Real-time Processing", "Sub-second latency for live audio applications."),
    ("Multi-language", "50+ languages with native-quality pronunciation."),
];

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <div class="marketing product">
            <header class="hero">
                <h1>"Meet Vexon, Your AI Audio Brain"</h1>
                <a href="/signup" class="btn btn-primary">"Start Creating"</a>
            </header>
            <CardGrid cards=AUDIENCES />
            <h2>"Powered by Modular AI"</h2>
            <CardGrid cards=TRAITS />
        </div>
    }
}

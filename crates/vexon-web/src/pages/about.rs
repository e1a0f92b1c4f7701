//! About Page

use leptos::prelude::*;

use crate::components::CardGrid;

const PRINCIPLES: &[(&str, &str)] = &[
    ("Total Transparency", "Our neural logic isn't a black box. We prioritize explainability in every generated waveform."),
    ("Hardened Security", "End-to-end encryption for every byte of audio, hosted on SOC 2 Type II infrastructure."),
    ("Ethical Consent", "Voice synthesis requires cryptographic proof of consent. We build with respect for identity."),
    ("Relentless R&D", "Staying at the bleeding edge of spectral reconstruction and neural synthesis research."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="marketing about">
            <header class="hero">
                <span class="eyebrow">"The Vexon Manifesto"</span>
                <h1>"Sound is Intelligence."</h1>
                <p class="status">"System Status: Active"</p>
            </header>
            <h2>"Ethical Precedents."</h2>
            <CardGrid cards=PRINCIPLES />
        </div>
    }
}

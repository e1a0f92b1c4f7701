//! Technology Page

use leptos::prelude::*;

use crate::components::CardGrid;

const PILLARS: &[(&str, &str)] = &[
    ("Neural Synergy Engine", "A distributed neural architecture that processes audio packets with quantum-level precision, enabling real-time voice synthesis and spectral reconstruction."),
    ("Temporal Alignment Protocol", "Proprietary algorithms that align phasing and transient responses across multiple audio streams, ensuring perfect synchronization even in complex environments."),
    ("Spectral Deep-Learning", "Advanced restoration models trained on petabytes of high-fidelity audio data to identify and remove noise while preserving original harmonic content."),
];

#[component]
pub fn TechnologyPage() -> impl IntoView {
    view! {
        <div class="marketing technology">
            <header class="hero">
                <span class="eyebrow">"Project Vexon Intel"</span>
                <h1>"Neural Architecture."</h1>
            </header>
            <CardGrid cards=PILLARS />
            <section class="cta">
                <h2>"Full Whitepaper Access"</h2>
                <p>"Explore the complete mathematical proofs and architectural documentation of our engine."</p>
                <a href="/contact" class="btn">"Request Docs"</a>
            </section>
        </div>
    }
}

//! Features Page

use leptos::prelude::*;

use crate::components::CardGrid;

const FEATURES: &[(&str, &str)] = &[
    ("Neural Voice Synthesis", "Craft hyper-realistic synthetic voices with nuanced emotional control and multi-dialect capabilities."),
    ("Global Dubbing", "Seamlessly translate and dub content while preserving the original speaker's unique vocal identity."),
    ("Rhythmic Alignment", "Automated temporal correction for perfectly synced audio-to-video or beat-matched loops."),
    ("Quantum Filtering", "Remove complex environmental noise and interference with proprietary neural cleaning algorithms."),
    ("Autonomous Mastering", "Elevate your audio to studio standards with AI that understands genre-specific spectral dynamics."),
    ("Adaptive Restoration", "Repair clipped or degraded samples using deep-learning spectral reconstruction techniques."),
    ("Sentiment Analysis", "Decode the subtext of any conversation with real-time emotional and psychological profiling."),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="marketing features">
            <header class="hero">
                <h1>"Audio Redefined."</h1>
            </header>
            <CardGrid cards=FEATURES />
            <section class="cta">
                <h2>"Ready to witness the power?"</h2>
                <a href="/product" class="btn btn-primary">"View Live Architecture"</a>
            </section>
        </div>
    }
}

//! Spectral Pro Workbench
//!
//! Static workspace; no restoration endpoint exists yet.

use leptos::prelude::*;

const TOOLS: [&str; 4] = ["De-Noise", "Vocal Extract", "Transient Cut", "Sync Align"];

/// Engine build shown in the info panel
const ENGINE_VERSION: &str = "v8.2.4 \"Void Runner\"";

#[component]
pub fn SpectralProPage() -> impl IntoView {
    view! {
        <div class="spectral-pro">
            <header>
                <span class="eyebrow">"Precision Workspace"</span>
                <h1>"Spectral Pro"</h1>
                <p>
                    "High-end architectural tools for audio cleaning, de-noising, and transient isolation. "
                    "Reconstruct degraded content with sub-atomic frequency control."
                </p>
            </header>

            <section class="workbench">
                <div class="controls">
                    <span class="btn">"Inject Buffer"</span>
                    <span class="target">"Target: None Loaded"</span>
                </div>
                <div class="canvas">
                    <p class="idle">"Waiting for injection..."</p>
                </div>
                <div class="tools">
                    {TOOLS
                        .iter()
                        .map(|label| view! { <button class="tool" disabled>{*label}</button> })
                        .collect_view()}
                </div>
            </section>

            <section class="info">
                <div class="panel">
                    <h3>"Quantum Restoration"</h3>
                    <p>
                        "Our restoration engine uses deep spectral reconstruction (DSR) to repair clipped "
                        "audio and fill missing frequency gaps with sample-perfect accuracy."
                    </p>
                </div>
                <div class="panel">
                    <h3>"Algorithm Version"</h3>
                    <p>
                        {format!("Currently running Spectral Engine {ENGINE_VERSION}. ")}
                        "All processing is hardware-accelerated via your local NPU cluster."
                    </p>
                </div>
            </section>
        </div>
    }
}

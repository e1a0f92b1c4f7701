//! Home Page

use leptos::prelude::*;

use crate::api::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="home">
            <header class="hero">
                <span class="badge">"Early access now open"</span>
                <h1>"From Sound to Sense"</h1>
                <p class="tagline">
                    "Vexon helps businesses and creators generate, enhance, and understand audio like never before."
                </p>
                <div class="cta">
                    {move || if auth.0.get().is_some() {
                        view! { <a href="/dashboard" class="btn btn-primary">"Open Dashboard"</a> }.into_any()
                    } else {
                        view! { <a href="/signup" class="btn btn-primary">"Start Creating"</a> }.into_any()
                    }}
                    <a href="/contact" class="btn">"Contact"</a>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"Neural Generation"</h3>
                    <p>"Compose entire soundscapes or individual instruments from skeletal prompts."</p>
                </div>
                <div class="feature">
                    <h3>"Quantum Enhancement"</h3>
                    <p>"Reconstruct degraded audio using temporal alignment and spectral deep-cleaning."</p>
                </div>
                <div class="feature">
                    <h3>"Semantic Analysis"</h3>
                    <p>"Extract emotional intent, subtext, and rhythmic structures from any audio stream."</p>
                </div>
            </section>
        </div>
    }
}

//! Dashboard Overview

use leptos::prelude::*;

use crate::api::use_auth;

const STATS: [(&str, &str, &str); 4] = [
    ("Neural Computations", "1,284", "+12.5%"),
    ("Hours Processed", "48.2h", "+5.1%"),
    ("Active Nodes", "12", "Stable"),
    ("Generation Rank", "Top 2%", "+0.4%"),
];

const RECENT: [(&str, &str, &str, &str); 3] = [
    ("Ambient Void - Layer 4", "Neural Synth", "2h ago", "Completed"),
    ("Vocal Isolation (Clean)", "Spectral Pro", "5h ago", "Completed"),
    ("Cyberpunk Rhythmic Loop", "Neural Synth", "Yesterday", "Exported"),
];

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = use_auth();
    let name = move || {
        auth.0
            .get()
            .map(|s| s.user.display_name())
            .unwrap_or_else(|| "Operator".into())
    };

    view! {
        <div class="overview">
            <header class="welcome">
                <h1>"Protocol Initialized. " <span>{name}</span></h1>
                <p>
                    "Systems are running at optimal efficiency. Neural clusters are ready for high-fidelity audio synthesis."
                </p>
                <a href="/dashboard/neural-lab" class="btn btn-primary">"Start New Experiment"</a>
            </header>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(label, value, change)| view! {
                        <div class="stat">
                            <span class="label">{*label}</span>
                            <span class="value">{*value}</span>
                            <span class="change">{*change}</span>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="recent">
                <h2>"Recent Generations"</h2>
                <ul>
                    {RECENT
                        .iter()
                        .map(|(title, kind, time, status)| view! {
                            <li>
                                <span class="title">{*title}</span>
                                <span class="kind">{*kind}</span>
                                <span class="time">{*time}</span>
                                <span class="status">{*status}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

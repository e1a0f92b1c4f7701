//! Not Found Page

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Signal lost. This sector of the grid does not exist."</p>
            <a href="/" class="btn">"Return Home"</a>
        </div>
    }
}

//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="htn-footer">
            <p>"Hack the North · Drag events to arrange your own schedule"</p>
        </footer>
    }
}

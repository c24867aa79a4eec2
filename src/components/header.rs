//! Header Component
//!
//! Title bar with sign in / sign out.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="htn-header">
            <div class="htn-header-brand">
                <span class="htn-logo">"HTN"</span>
                <h1>"Hack the North Events"</h1>
            </div>

            {move || if ctx.logged_in.get() {
                view! {
                    <div class="logged-in-info">
                        <span>"Welcome, hacker!"</span>
                        <button class="logout-button" on:click=move |_| ctx.logout()>"Sign Out"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <button class="login-button" on:click=move |_| ctx.open_login()>"Sign In"</button>
                }.into_any()
            }}
        </header>
    }
}

//! Login Modal Component
//!
//! Username/password form for the demo account.

use leptos::prelude::*;

use crate::auth::{credentials_hint, LOGIN_ERROR};
use crate::context::use_app_context;

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.login(&username.get_untracked(), &password.get_untracked()) {
            set_error.set(None);
        } else {
            set_error.set(Some(LOGIN_ERROR));
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| ctx.close_login()></div>
        <div class="login-modal" role="dialog">
            <button class="modal-close" aria-label="Close" on:click=move |_| ctx.close_login()>"✕"</button>

            <h2>"Welcome Back"</h2>
            <p class="modal-subtitle">"Sign in to access private events"</p>

            <form class="login-form" on:submit=on_submit>
                <input
                    type="text"
                    class="login-input"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    class="login-input"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
                <button type="submit" class="login-submit">"Sign In"</button>
            </form>

            <p class="login-hint">{credentials_hint()}</p>
        </div>
    }
}

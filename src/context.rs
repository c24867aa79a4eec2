//! Application Context
//!
//! Session signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::auth;
use crate::order::EventId;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed in with the demo account - read
    pub logged_in: ReadSignal<bool>,
    set_logged_in: WriteSignal<bool>,
    /// Login modal open - read
    pub show_login: ReadSignal<bool>,
    set_show_login: WriteSignal<bool>,
    /// Event open in the detail panel - read
    pub selected_event: ReadSignal<Option<EventId>>,
    set_selected_event: WriteSignal<Option<EventId>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (logged_in, set_logged_in) = signal(false);
        let (show_login, set_show_login) = signal(false);
        let (selected_event, set_selected_event) = signal(None::<EventId>);
        Self {
            logged_in,
            set_logged_in,
            show_login,
            set_show_login,
            selected_event,
            set_selected_event,
        }
    }

    /// Try the demo account; closes the modal on success
    pub fn login(&self, username: &str, password: &str) -> bool {
        if !auth::check_credentials(username, password) {
            log::info!("rejected login for {:?}", username);
            return false;
        }
        self.set_logged_in.set(true);
        self.set_show_login.set(false);
        true
    }

    pub fn logout(&self) {
        self.set_logged_in.set(false);
    }

    pub fn open_login(&self) {
        self.set_show_login.set(true);
    }

    pub fn close_login(&self) {
        self.set_show_login.set(false);
    }

    pub fn select(&self, id: EventId) {
        self.set_selected_event.set(Some(id));
    }

    pub fn close_detail(&self) {
        self.set_selected_event.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

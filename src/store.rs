//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Event;

/// Where the initial event load stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Events as fetched (sorted by start time)
    pub events: Vec<Event>,
    /// Events in the user's saved order
    pub ordered: Vec<Event>,
    pub load: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install a fresh load and its reconciled order
pub fn store_set_loaded(store: &AppStore, events: Vec<Event>, ordered: Vec<Event>) {
    *store.events().write() = events;
    *store.ordered().write() = ordered;
    *store.load().write() = LoadState::Ready;
}

/// Replace the displayed order after a reorder
pub fn store_set_ordered(store: &AppStore, ordered: Vec<Event>) {
    *store.ordered().write() = ordered;
}

pub fn store_set_failed(store: &AppStore, message: String) {
    *store.load().write() = LoadState::Failed(message);
}

/// Look up an event by id among all fetched events
pub fn store_find_event(store: &AppStore, id: u32) -> Option<Event> {
    store.events().read().iter().find(|e| e.id == id).cloned()
}

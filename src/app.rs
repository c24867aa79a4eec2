//! HTN Events Frontend App
//!
//! Loads the event feed once, then hands off to the dashboard.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EventDetail, EventList, Footer, Header, LoginModal, SearchHero};
use crate::config::ALL_CATEGORIES;
use crate::context::{use_app_context, AppContext};
use crate::filter::{categories, EventFilter};
use crate::models::Event;
use crate::order::OrderStore;
use crate::storage::BrowserStore;
use crate::store::{
    store_find_event, store_set_failed, store_set_loaded, use_app_store, AppState, AppStateStoreFields,
    AppStore, LoadState,
};

/// Saved event order, kept outside the reactive graph (browser storage isn't `Send`)
pub type EventOrder = StoredValue<OrderStore<Event, BrowserStore>, LocalStorage>;

/// Get the event order handle from context
pub fn use_event_order() -> EventOrder {
    expect_context::<EventOrder>()
}

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    let order: EventOrder = StoredValue::new_local(OrderStore::new(BrowserStore::open()));

    provide_context(store);
    provide_context(order);
    provide_context(AppContext::new());

    // Load events on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_events().await {
                Ok(events) => {
                    let ordered = order
                        .try_update_value(|o| o.reconcile(&events).to_vec())
                        .unwrap_or_else(|| events.clone());
                    log::info!("loaded {} events", events.len());
                    store_set_loaded(&store, events, ordered);
                }
                Err(e) => {
                    log::error!("event load failed: {}", e);
                    store_set_failed(&store, e.to_string());
                }
            }
        });
    });

    view! {
        {move || match store.load().get() {
            LoadState::Loading => view! { <LoadingScreen /> }.into_any(),
            LoadState::Failed(message) => view! { <ErrorScreen message=message /> }.into_any(),
            LoadState::Ready => view! { <Dashboard /> }.into_any(),
        }}
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="screen-center">
            <div class="spinner"></div>
            <p>"Loading events..."</p>
        </div>
    }
}

#[component]
fn ErrorScreen(message: String) -> impl IntoView {
    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="screen-center">
            <div class="error-box">
                <p class="error-text">{format!("Error: {}", message)}</p>
                <button class="retry-button" on:click=reload>"Try Again"</button>
            </div>
        </div>
    }
}

/// Header, search, sortable list and overlays
#[component]
fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());

    let category_names = Memo::new(move |_| categories(&store.events().read()));

    let filtered = Memo::new(move |_| {
        let filter = EventFilter {
            logged_in: ctx.logged_in.get(),
            category: category.get(),
            query: query.get(),
        };
        filter.apply(&store.ordered().read())
    });

    let total = move || store.events().read().len();

    view! {
        <div class="app">
            <Header />

            <SearchHero
                query=query
                set_query=set_query
                category=category
                set_category=set_category
                categories=category_names
            />

            <p class="event-count">
                {move || format!("Showing {} of {} events", filtered.with(Vec::len), total())}
                {move || (!ctx.logged_in.get()).then(|| view! {
                    <span class="hint">" (Sign in to see private events)"</span>
                })}
            </p>

            <main class="events-main">
                <EventList events=filtered />
            </main>

            {move || ctx
                .selected_event
                .get()
                .and_then(|id| store_find_event(&store, id))
                .map(|event| view! { <EventDetail event=event /> })}

            {move || ctx.show_login.get().then(|| view! { <LoginModal /> })}

            <Footer />
        </div>
    }
}

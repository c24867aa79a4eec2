//! Event Detail Component
//!
//! Side panel with the full event, its speakers and related events.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{related_to, Event};
use crate::store::{use_app_store, AppStateStoreFields};

/// Compact card for a related event; clicking switches the panel to it
#[component]
fn RelatedEventCard(event: Event) -> impl IntoView {
    let ctx = use_app_context();
    let id = event.id;

    view! {
        <button class="related-event-card" on:click=move |_| ctx.select(id)>
            <img src=event.thumbnail.clone() alt=event.title.clone() />
            <div>
                <p class="related-title">{event.title.clone()}</p>
                <p class="related-meta">{format!("{} · {}", event.date, event.time)}</p>
            </div>
        </button>
    }
}

#[component]
pub fn EventDetail(event: Event) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let related: Vec<Event> = related_to(&event, &store.events().read_untracked())
        .into_iter()
        .cloned()
        .collect();
    let link = event.link(ctx.logged_in.get_untracked()).map(str::to_string);
    let speakers = event
        .speakers
        .iter()
        .cloned()
        .zip(event.speaker_initials())
        .collect::<Vec<_>>();

    view! {
        <div class="detail-overlay" on:click=move |_| ctx.close_detail()></div>
        <aside class="detail-panel">
            <div class="detail-close-bar">
                <button class="detail-back" on:click=move |_| ctx.close_detail()>"← Back"</button>
                <button class="detail-close" aria-label="Close" on:click=move |_| ctx.close_detail()>"✕"</button>
            </div>

            <div class="detail-image">
                <img src=event.thumbnail.clone() alt=event.title.clone() />
                {event.is_private().then(|| view! { <span class="private-badge">"Private Event"</span> })}
            </div>

            <h2 class="detail-title">{event.title.clone()}</h2>
            <span class="category-badge">{event.category.clone()}</span>

            <div class="detail-meta">
                <div class="detail-meta-row"><span class="icon">"📅"</span><span>{event.date.clone()}</span></div>
                <div class="detail-meta-row"><span class="icon">"🕒"</span><span>{event.time.clone()}</span></div>
                <div class="detail-meta-row"><span class="icon">"📍"</span><span>{event.location.clone()}</span></div>
            </div>

            <p class="detail-description">{event.description.clone()}</p>

            {(!speakers.is_empty()).then(|| view! {
                <section class="detail-speakers">
                    <h3>"Speakers"</h3>
                    {speakers.into_iter().map(|(speaker, initial)| view! {
                        <div class="speaker">
                            <div class="speaker-avatar">{initial.to_string()}</div>
                            <div>
                                <p class="speaker-name">{speaker.name}</p>
                                <p class="speaker-title">{speaker.title}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </section>
            })}

            {(!related.is_empty()).then(|| view! {
                <section class="detail-related">
                    <h3>"Related Events"</h3>
                    {related.into_iter().map(|e| view! { <RelatedEventCard event=e /> }).collect_view()}
                </section>
            })}

            {link.map(|href| view! {
                <a class="detail-action" href=href target="_blank" rel="noopener noreferrer">"Join Event"</a>
            })}
        </aside>
    }
}

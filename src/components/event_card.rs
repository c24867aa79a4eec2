//! Event Card Component
//!
//! One row of the sortable event list.

use leptos::prelude::*;

use crate::models::Event;

#[component]
pub fn EventCard(event: Event, is_last: bool) -> impl IntoView {
    let private = event.is_private();
    let speakers = event
        .speakers
        .iter()
        .map(|s| s.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class=if is_last { "event-card last" } else { "event-card" }>
            <span class="drag-handle" title="Drag to reorder">"⠿"</span>
            <img class="event-thumbnail" src=event.thumbnail.clone() alt=event.title.clone() />
            <div class="event-body">
                <div class="event-header">
                    <h3 class="event-title">{event.title.clone()}</h3>
                    {private.then(|| view! { <span class="private-badge">"Private"</span> })}
                </div>
                <span class="category-badge">{event.category.clone()}</span>
                <p class="event-meta">
                    <span>{event.date.clone()}</span>
                    " · "
                    <span>{event.time.clone()}</span>
                </p>
                {(!speakers.is_empty()).then(|| view! { <p class="event-speakers">{speakers}</p> })}
            </div>
            <span class="view-details">"View details →"</span>
        </div>
    }
}

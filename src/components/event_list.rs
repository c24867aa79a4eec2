//! Event List Component
//!
//! Sortable list of the filtered events. Drops are applied to the full
//! saved order, so hidden events keep their place.

use leptos::prelude::*;
use leptos_sortable::*;

use crate::app::use_event_order;
use crate::components::EventCard;
use crate::context::use_app_context;
use crate::models::Event;
use crate::store::{store_set_ordered, use_app_store};

#[component]
pub fn EventList(events: Memo<Vec<Event>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let order = use_event_order();

    let sort = create_sort_signals();

    bind_global_mouseup(sort, move |dragged_id, target_id| {
        log::debug!("drop: dragged={}, target={}", dragged_id, target_id);
        if let Some(ordered) = order.try_update_value(|o| o.move_item(dragged_id, target_id).to_vec()) {
            store_set_ordered(&store, ordered);
        }
    });

    view! {
        <div class="events-list">
            {move || events.with(|list| list.is_empty()).then(|| view! {
                <div class="events-empty">
                    <p class="events-empty-title">"No events found"</p>
                    <p class="events-empty-hint">"Try adjusting your search or filters"</p>
                </div>
            })}
            <For
                each=move || {
                    let list = events.get();
                    let last = list.len().saturating_sub(1);
                    list.into_iter().enumerate().map(move |(i, e)| (e, i == last)).collect::<Vec<_>>()
                }
                key=|(event, is_last)| (event.id, *is_last)
                children=move |(event, is_last)| {
                    let id = event.id;

                    let on_mousedown = make_on_mousedown(sort, id);
                    let on_mouseenter = make_on_item_mouseenter(sort, id);
                    let on_mouseleave = make_on_mouseleave(sort);

                    let wrapper_class = move || {
                        let mut c = String::from("sortable-item");
                        if sort.is_dragged(id) { c.push_str(" dragging"); }
                        if sort.is_over(id) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=wrapper_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                            on:click=move |_| {
                                if !sort.click_suppressed() {
                                    ctx.select(id);
                                }
                            }
                        >
                            <EventCard event=event is_last=is_last />
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Search Hero Component
//!
//! Search box and category chips above the event list.

use leptos::prelude::*;

#[component]
pub fn SearchHero(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    category: ReadSignal<String>,
    set_category: WriteSignal<String>,
    categories: Memo<Vec<String>>,
) -> impl IntoView {
    view! {
        <section class="space-hero">
            <h2 class="hero-title">"Explore Events"</h2>

            <div class="search-container">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search events, speakers, categories..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                {move || (!query.get().is_empty()).then(|| view! {
                    <button
                        class="clear-search"
                        aria-label="Clear search"
                        on:click=move |_| set_query.set(String::new())
                    >
                        "✕"
                    </button>
                })}
            </div>

            <div class="category-chips">
                <For
                    each=move || categories.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let label = name.clone();
                        let chip = name.clone();
                        let is_active = move || category.get() == chip;
                        view! {
                            <button
                                class=move || if is_active() { "category-chip active" } else { "category-chip" }
                                on:click=move |_| set_category.set(name.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}

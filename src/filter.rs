//! Event Filtering
//!
//! Visibility (login), category chip and free-text search.

use crate::config::{ALL_CATEGORIES, PUBLIC_PERMISSION};
use crate::models::Event;

/// Current filter inputs
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub logged_in: bool,
    pub category: String,
    pub query: String,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            logged_in: false,
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

/// Public events are visible to everyone, anything else needs a login
pub fn is_visible(event: &Event, logged_in: bool) -> bool {
    logged_in || event.permission.as_deref().map_or(true, |p| p == PUBLIC_PERMISSION)
}

/// Case-insensitive substring match on title, description, category or speakers.
/// A blank query matches everything.
pub fn matches_query(event: &Event, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    event.title.to_lowercase().contains(&query)
        || event.description.to_lowercase().contains(&query)
        || event.category.to_lowercase().contains(&query)
        || event.speakers.iter().any(|s| s.name.to_lowercase().contains(&query))
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        is_visible(event, self.logged_in)
            && (self.category == ALL_CATEGORIES || event.category == self.category)
            && matches_query(event, &self.query)
    }

    /// Keep matching events in their current order
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// "All" followed by each category once, in first-seen order
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for event in events {
        if !out.contains(&event.category) {
            out.push(event.category.clone());
        }
    }
    out
}

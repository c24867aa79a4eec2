//! Frontend Models
//!
//! Event payload as served by the API, and the shaped form the UI renders.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DESCRIPTION, PRIVATE_PERMISSION, RELATED_EVENTS_LIMIT, VENUE_NAME};
use crate::order::{EventId, Keyed};

/// Speaker as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSpeaker {
    pub name: String,
    pub profile_pic: Option<String>,
}

/// Event as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEvent {
    pub id: EventId,
    pub name: String,
    pub event_type: String,
    pub permission: Option<String>,
    /// Epoch milliseconds
    pub start_time: i64,
    pub end_time: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub speakers: Vec<ApiSpeaker>,
    pub public_url: Option<String>,
    pub private_url: Option<String>,
    #[serde(default)]
    pub related_events: Vec<EventId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub title: String,
}

/// Event shaped for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub thumbnail: String,
    pub description: String,
    pub category: String,
    pub speakers: Vec<Speaker>,
    pub permission: Option<String>,
    pub related_events: Vec<EventId>,
    pub public_url: Option<String>,
    pub private_url: Option<String>,
    pub start_time: i64,
}

impl Keyed for Event {
    fn key(&self) -> EventId {
        self.id
    }
}

const THUMBNAIL_WORKSHOP: &str = "https://images.unsplash.com/photo-1555255707-c07966088b7b?w=400&h=400&fit=crop";
const THUMBNAIL_ACTIVITY: &str = "https://images.unsplash.com/photo-1511578314322-379afb476865?w=400&h=400&fit=crop";
const THUMBNAIL_TECH_TALK: &str = "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=400&h=400&fit=crop";
const THUMBNAIL_CEREMONY: &str = "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400&h=400&fit=crop";

/// Display name for an API event type; unknown types pass through
pub fn category_for(event_type: &str) -> String {
    match event_type {
        "workshop" => "Workshop".to_string(),
        "activity" => "Activity".to_string(),
        "tech_talk" => "Tech Talk".to_string(),
        "ceremony" => "Ceremony".to_string(),
        other => other.to_string(),
    }
}

pub fn thumbnail_for(event_type: &str) -> &'static str {
    match event_type {
        "workshop" => THUMBNAIL_WORKSHOP,
        "tech_talk" => THUMBNAIL_TECH_TALK,
        "ceremony" => THUMBNAIL_CEREMONY,
        _ => THUMBNAIL_ACTIVITY,
    }
}

fn local_time<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|utc| utc.with_timezone(tz))
}

/// `Jan 12, 2021`
pub fn format_date<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    local_time(millis, tz)
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// `9:00 AM - 10:30 AM`
pub fn format_time_range<Tz: TimeZone>(start: i64, end: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match (local_time(start, tz), local_time(end, tz)) {
        (Some(s), Some(e)) => format!("{} - {}", s.format("%-I:%M %p"), e.format("%-I:%M %p")),
        _ => String::new(),
    }
}

impl Event {
    /// Shape an API event, rendering times in `tz`
    pub fn from_api<Tz: TimeZone>(api: ApiEvent, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: api.id,
            date: format_date(api.start_time, tz),
            time: format_time_range(api.start_time, api.end_time, tz),
            location: VENUE_NAME.to_string(),
            thumbnail: thumbnail_for(&api.event_type).to_string(),
            description: api
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            category: category_for(&api.event_type),
            speakers: api
                .speakers
                .into_iter()
                .map(|s| Speaker { name: s.name, title: "Speaker".to_string() })
                .collect(),
            title: api.name,
            permission: api.permission,
            related_events: api.related_events,
            public_url: api.public_url,
            private_url: api.private_url,
            start_time: api.start_time,
        }
    }

    pub fn is_private(&self) -> bool {
        self.permission.as_deref() == Some(PRIVATE_PERMISSION)
    }

    /// Link shown in the detail panel; the private one only when signed in
    pub fn link(&self, logged_in: bool) -> Option<&str> {
        if logged_in {
            self.private_url.as_deref().or(self.public_url.as_deref())
        } else {
            self.public_url.as_deref()
        }
    }

    /// First letter of each speaker name, for avatars
    pub fn speaker_initials(&self) -> Vec<char> {
        self.speakers
            .iter()
            .map(|s| s.name.chars().next().unwrap_or('?'))
            .collect()
    }
}

/// Events listed in `event.related_events`, in `all` order, capped
pub fn related_to<'a>(event: &Event, all: &'a [Event]) -> Vec<&'a Event> {
    all.iter()
        .filter(|e| e.id != event.id && event.related_events.contains(&e.id))
        .take(RELATED_EVENTS_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2021-01-12 14:00:00 UTC
    const START: i64 = 1_610_460_000_000;
    // 2021-01-12 15:30:00 UTC
    const END: i64 = 1_610_465_400_000;

    fn api_event(id: EventId, event_type: &str) -> ApiEvent {
        ApiEvent {
            id,
            name: format!("Event {}", id),
            event_type: event_type.to_string(),
            permission: None,
            start_time: START,
            end_time: END,
            description: None,
            speakers: vec![],
            public_url: None,
            private_url: None,
            related_events: vec![],
        }
    }

    fn shaped(id: EventId, related: Vec<EventId>) -> Event {
        let mut api = api_event(id, "workshop");
        api.related_events = related;
        Event::from_api(api, &Utc)
    }

    #[test]
    fn test_from_api_formats_date_and_time() {
        let event = Event::from_api(api_event(1, "workshop"), &Utc);
        assert_eq!(event.date, "Jan 12, 2021");
        assert_eq!(event.time, "2:00 PM - 3:30 PM");
        assert_eq!(event.location, VENUE_NAME);
    }

    #[test]
    fn test_from_api_maps_category_and_thumbnail() {
        let talk = Event::from_api(api_event(1, "tech_talk"), &Utc);
        assert_eq!(talk.category, "Tech Talk");
        assert_eq!(talk.thumbnail, THUMBNAIL_TECH_TALK);

        let other = Event::from_api(api_event(2, "networking"), &Utc);
        assert_eq!(other.category, "networking");
        assert_eq!(other.thumbnail, THUMBNAIL_ACTIVITY);
    }

    #[test]
    fn test_from_api_defaults_description_and_speaker_titles() {
        let mut api = api_event(1, "activity");
        api.speakers = vec![ApiSpeaker { name: "Ada".to_string(), profile_pic: None }];
        let event = Event::from_api(api, &Utc);

        assert_eq!(event.description, DEFAULT_DESCRIPTION);
        assert_eq!(event.speakers, vec![Speaker { name: "Ada".to_string(), title: "Speaker".to_string() }]);
        assert_eq!(event.speaker_initials(), vec!['A']);
    }

    #[test]
    fn test_api_event_decodes_with_missing_lists() {
        let json = r#"{"id":7,"name":"Opening","event_type":"ceremony","start_time":0,"end_time":1,"extra":true}"#;
        let api: ApiEvent = serde_json::from_str(json).unwrap();
        assert_eq!(api.id, 7);
        assert!(api.speakers.is_empty());
        assert!(api.related_events.is_empty());
        assert_eq!(api.permission, None);
    }

    #[test]
    fn test_is_private() {
        let mut api = api_event(1, "activity");
        api.permission = Some("private".to_string());
        assert!(Event::from_api(api, &Utc).is_private());
        assert!(!Event::from_api(api_event(2, "activity"), &Utc).is_private());
    }

    #[test]
    fn test_link_prefers_private_url_when_logged_in() {
        let mut api = api_event(1, "activity");
        api.public_url = Some("https://pub".to_string());
        api.private_url = Some("https://priv".to_string());
        let event = Event::from_api(api, &Utc);

        assert_eq!(event.link(false), Some("https://pub"));
        assert_eq!(event.link(true), Some("https://priv"));
    }

    #[test]
    fn test_related_to_excludes_self_and_caps() {
        let all = vec![
            shaped(1, vec![1, 2, 3, 4, 5]),
            shaped(2, vec![]),
            shaped(3, vec![]),
            shaped(4, vec![]),
            shaped(5, vec![]),
        ];
        let related: Vec<EventId> = related_to(&all[0], &all).iter().map(|e| e.id).collect();
        assert_eq!(related, vec![2, 3, 4]);
    }
}

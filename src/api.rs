//! Event API
//!
//! One `GET` against the public event feed per page load.

use chrono::{Local, TimeZone};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::EVENTS_API_URL;
use crate::error::{AppError, AppResult};
use crate::models::{ApiEvent, Event};

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Sort by start time (stable, so ties keep feed order) and shape for display
pub fn shape_events<Tz: TimeZone>(mut api_events: Vec<ApiEvent>, tz: &Tz) -> Vec<Event>
where
    Tz::Offset: std::fmt::Display,
{
    api_events.sort_by_key(|e| e.start_time);
    api_events.into_iter().map(|e| Event::from_api(e, tz)).collect()
}

/// Fetch, sort and shape all events in the browser's time zone
pub async fn fetch_events() -> AppResult<Vec<Event>> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(EVENTS_API_URL))
        .await
        .map_err(|e| AppError::Network(js_message(e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| AppError::Network(js_message(e)))?;

    if !response.ok() {
        return Err(AppError::Http(response.status()));
    }

    let body = response.json().map_err(|e| AppError::Decode(js_message(e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| AppError::Decode(js_message(e)))?;
    let api_events: Vec<ApiEvent> =
        serde_wasm_bindgen::from_value(body).map_err(|e| AppError::Decode(e.to_string()))?;

    log::info!("fetched {} events", api_events.len());
    Ok(shape_events(api_events, &Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn api_event(id: u32, start_time: i64) -> ApiEvent {
        ApiEvent {
            id,
            name: format!("Event {}", id),
            event_type: "activity".to_string(),
            permission: None,
            start_time,
            end_time: start_time + 60_000,
            description: None,
            speakers: vec![],
            public_url: None,
            private_url: None,
            related_events: vec![],
        }
    }

    #[test]
    fn test_shape_events_sorts_by_start_time() {
        let shaped = shape_events(
            vec![api_event(1, 3_000), api_event(2, 1_000), api_event(3, 2_000), api_event(4, 1_000)],
            &Utc,
        );
        let ids: Vec<u32> = shaped.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_shape_events_empty() {
        assert!(shape_events(vec![], &Utc).is_empty());
    }
}

//! Application Constants
//!
//! Everything here is fixed at build time; the app has no runtime settings.

/// Upstream event feed
pub const EVENTS_API_URL: &str = "https://api.hackthenorth.com/v3/events";

/// localStorage key holding the saved event order
pub const ORDER_STORAGE_KEY: &str = "htn-event-order";

/// Demo login (private events)
pub const DEMO_USERNAME: &str = "hacker";
pub const DEMO_PASSWORD: &str = "htn2026";

pub const VENUE_NAME: &str = "Hack the North Venue";

pub const DEFAULT_DESCRIPTION: &str = "Join us for this exciting event at Hack the North!";

/// Max related events shown in the detail panel
pub const RELATED_EVENTS_LIMIT: usize = 3;

/// Category chip that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Permission value marking an event as login-only
pub const PRIVATE_PERMISSION: &str = "private";
pub const PUBLIC_PERMISSION: &str = "public";

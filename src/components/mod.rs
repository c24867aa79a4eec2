//! UI Components
//!
//! Leptos components for the event dashboard.

mod header;
mod search_hero;
mod event_card;
mod event_list;
mod event_detail;
mod login_modal;
mod footer;

pub use header::Header;
pub use search_hero::SearchHero;
pub use event_card::EventCard;
pub use event_list::EventList;
pub use event_detail::EventDetail;
pub use login_modal::LoginModal;
pub use footer::Footer;

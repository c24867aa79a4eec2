//! Demo Login
//!
//! Private events sit behind a single hardcoded account. The session flag
//! lives in `AppContext` and is gone on reload.

use crate::config::{DEMO_PASSWORD, DEMO_USERNAME};

pub const LOGIN_ERROR: &str = "Invalid username or password";

pub fn check_credentials(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// Hint shown under the login form
pub fn credentials_hint() -> String {
    format!("Hint: username is \"{}\", password is \"{}\"", DEMO_USERNAME, DEMO_PASSWORD)
}

//! Flash message utilities for server-to-client communication.
//!
//! Flash messages are short-lived notices carried in a cookie across a
//! redirect, displayed once by the next rendered page and then cleared.

use axum::http::header::{HeaderMap, COOKIE, SET_COOKIE};
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

/// Cookie name carrying the flash message.
const FLASH_COOKIE: &str = "flash_message";

/// Flash message structure stored in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Message type ("success", "warning" or "error")
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message content to display
    pub message: String,
}

impl FlashMessage {
    /// Create a success flash message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
        }
    }

    /// Create a warning flash message (validation and not-found notices).
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message_type: "warning".to_string(),
            message: message.into(),
        }
    }

    /// Create an error flash message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message_type: "error".to_string(),
            message: message.into(),
        }
    }

    /// Build a Set-Cookie header value for the flash message.
    ///
    /// Cookie properties:
    /// - Path: / (accessible from any page)
    /// - SameSite: Lax (sent on navigation, not cross-site requests)
    /// - Max-Age: 60 (expires after 60 seconds as a safety net)
    pub fn to_set_cookie_header(&self) -> String {
        let cookie_value = serde_json::to_string(self).unwrap_or_default();
        let encoded = urlencoding::encode(&cookie_value);
        format!("{FLASH_COOKIE}={encoded}; Path=/; SameSite=Lax; Max-Age=60")
    }
}

/// Create a redirect response with a flash message cookie.
pub fn redirect_with_flash(url: &str, flash: FlashMessage) -> Response {
    let cookie_header = flash.to_set_cookie_header();

    ([(SET_COOKIE, cookie_header)], Redirect::to(url)).into_response()
}

/// Read the flash message from the request's Cookie headers, if any.
///
/// The caller clears the cookie on the rendered response via
/// [`clear_cookie_header`], so a message is shown exactly once.
pub fn take_flash(headers: &HeaderMap) -> Option<FlashMessage> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix(FLASH_COOKIE)?.strip_prefix('='))
        .find_map(|value| {
            let decoded = urlencoding::decode(value).ok()?;
            serde_json::from_str(&decoded).ok()
        })
}

/// Set-Cookie header value that expires the flash cookie.
pub fn clear_cookie_header() -> String {
    format!("{FLASH_COOKIE}=; Path=/; SameSite=Lax; Max-Age=0")
}

//! Uniform response interception for API calls
//!
//! Mirrors the backend's error taxonomy: a 401 means the session cookie is
//! gone, so the whole page is sent to the login route; a 5xx surfaces a
//! generic notification. Logical failures inside 2xx payloads are the
//! caller's business.

use crate::notify;
use ding_http::ClientError;

/// Navigate the whole document, dropping all view state
pub fn hard_redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Apply the global interception rules to a failed call
pub fn intercept(error: &ClientError) {
    if error.is_auth_expired() {
        hard_redirect("/login");
    } else if error.is_server_error() {
        notify::error("Server error. Please try again later.");
    }
}

/// Wrapper for API calls that applies the global interception rules
pub async fn call<T, F>(api_call: F) -> Result<T, ClientError>
where
    F: std::future::Future<Output = Result<T, ClientError>>,
{
    match api_call.await {
        Ok(result) => Ok(result),
        Err(error) => {
            intercept(&error);
            Err(error)
        }
    }
}

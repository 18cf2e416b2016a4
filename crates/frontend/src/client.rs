//! Client configuration and initialization

use crate::config::UiConfig;
use ding_http::{ClientError, DingClient, DingClientBuilder};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<DingClient>>> = Lazy::new(|| Mutex::new(None));

/// Base URL for API calls, resolved at build time
fn api_base_url() -> String {
    option_env!("DING_API_URL")
        .map(str::to_string)
        .unwrap_or_else(|| UiConfig::DEFAULT_API_BASE_URL.to_string())
}

/// Get the shared client instance, creating it on first use
pub fn create_client() -> Result<DingClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    match client_lock.as_ref() {
        Some(client) => Ok(client.clone()),
        None => {
            let client = DingClientBuilder::new().base_url(api_base_url()).build()?;
            *client_lock = Some(client.clone());
            Ok(client)
        }
    }
}

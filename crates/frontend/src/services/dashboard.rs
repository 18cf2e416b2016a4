//! Dashboard API service

use crate::api;
use crate::client::create_client;
use ding_http::types::DashboardStats;

/// Dashboard API service
#[derive(Clone, Default)]
pub struct DashboardApiService;

impl DashboardApiService {
    /// Create a new dashboard API service
    pub fn new() -> Self {
        Self
    }

    /// Order and revenue statistics for a restaurant
    pub async fn stats(&self, restaurant_id: &str) -> Result<DashboardStats, String> {
        let client = create_client().map_err(|e| format!("Failed to get client: {e}"))?;
        api::call(client.dashboard_stats(restaurant_id))
            .await
            .map_err(|e| e.to_string())
    }
}

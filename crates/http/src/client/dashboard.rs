//! Typed dashboard endpoints

use super::{error::ClientError, typed::DingClient};
use crate::types::DashboardStats;

/// Dashboard endpoints
impl DingClient {
    /// Order and revenue statistics for a restaurant
    pub async fn dashboard_stats(
        &self,
        restaurant_id: &str,
    ) -> Result<DashboardStats, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/dashboard/stats")
            .query(&[("restaurantId", restaurant_id)]);
        self.execute(req).await
    }
}

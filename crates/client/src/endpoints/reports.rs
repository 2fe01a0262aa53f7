//! Owner-dashboard reporting figures.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::reports::DashboardStats;

use crate::ApiClient;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> BookingResult<DashboardStats> {
        self.get_json("/reports/dashboard-stats", &[]).await
    }
}

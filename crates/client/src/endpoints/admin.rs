//! Super-admin tenant management.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::business::{AdminStats, BusinessUser, Plan, UpdatePlanRequest};
use citaflow_core::models::pagination::Paginated;

use super::ListQuery;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_businesses(
        &self,
        query: &ListQuery,
    ) -> BookingResult<Paginated<BusinessUser>> {
        self.get_json("/admin/businesses", &query.to_pairs()).await
    }

    pub async fn admin_stats(&self) -> BookingResult<AdminStats> {
        self.get_json("/admin/stats", &[]).await
    }

    pub async fn update_business_plan(
        &self,
        user_id: &str,
        plan: Plan,
    ) -> BookingResult<BusinessUser> {
        self.patch_json(
            &format!("/admin/businesses/{user_id}/plan"),
            &UpdatePlanRequest { plan },
        )
        .await
    }
}

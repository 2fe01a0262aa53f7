//! Super-admin tenant table.
//!
//! A plain [`ListController`] over `/admin/businesses` plus the one write
//! the panel offers: switching a tenant's plan.

use std::sync::Arc;

use async_trait::async_trait;
use citaflow_client::ApiClient;
use citaflow_client::endpoints::ListQuery;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::business::{BusinessUser, Plan};
use citaflow_core::models::pagination::Paginated;
use mockall::automock;

use crate::cache::QueryCache;
use crate::lists::{ListController, ListFetcher};
use crate::mutation::MutationState;

pub const BUSINESSES_PAGE_SIZE: u32 = 10;

const BUSINESSES_RESOURCE: &str = "admin-businesses";

#[automock]
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn businesses(&self, query: &ListQuery) -> BookingResult<Paginated<BusinessUser>>;
    async fn set_plan(&self, user_id: &str, plan: Plan) -> BookingResult<BusinessUser>;
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn businesses(&self, query: &ListQuery) -> BookingResult<Paginated<BusinessUser>> {
        self.list_businesses(query).await
    }

    async fn set_plan(&self, user_id: &str, plan: Plan) -> BookingResult<BusinessUser> {
        self.update_business_plan(user_id, plan).await
    }
}

struct BusinessFetcher {
    api: Arc<dyn AdminApi>,
}

#[async_trait]
impl ListFetcher<BusinessUser> for BusinessFetcher {
    async fn fetch(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> BookingResult<Paginated<BusinessUser>> {
        self.api.businesses(&ListQuery::new(page, limit, search)).await
    }
}

pub struct AdminPanel {
    list: ListController<BusinessUser>,
    plan_change: MutationState<BusinessUser>,
    api: Arc<dyn AdminApi>,
}

impl AdminPanel {
    pub fn new(cache: Arc<QueryCache>, api: Arc<dyn AdminApi>) -> Self {
        let fetcher = Arc::new(BusinessFetcher { api: api.clone() });
        Self {
            list: ListController::new(BUSINESSES_RESOURCE, BUSINESSES_PAGE_SIZE, cache, fetcher),
            plan_change: MutationState::Idle,
            api,
        }
    }

    pub fn list(&self) -> &ListController<BusinessUser> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController<BusinessUser> {
        &mut self.list
    }

    pub fn plan_change(&self) -> &MutationState<BusinessUser> {
        &self.plan_change
    }

    /// Switches one tenant's plan, then refetches the table so the row and
    /// its derived limits update.
    pub async fn change_plan(&mut self, user_id: &str, plan: Plan) -> BookingResult<()> {
        self.plan_change = MutationState::Pending;
        match self.api.set_plan(user_id, plan).await {
            Ok(updated) => {
                tracing::info!(user_id, ?plan, "Tenant plan updated");
                self.plan_change = MutationState::Success(updated);
                self.list.after_mutation().await
            }
            Err(err) => {
                self.plan_change = MutationState::Error(err.user_message());
                Err(err)
            }
        }
    }
}

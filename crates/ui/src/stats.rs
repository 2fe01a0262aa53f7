//! Cached dashboard and admin headline figures, and the profile form.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use citaflow_client::ApiClient;
use citaflow_core::errors::BookingResult;
use citaflow_core::models::business::AdminStats;
use citaflow_core::models::profile::{BusinessProfile, UpdateProfileRequest};
use citaflow_core::models::reports::DashboardStats;
use mockall::automock;

use crate::cache::{QueryCache, QueryKey};
use crate::mutation::MutationState;

const STATS_STALE: Duration = Duration::from_secs(5 * 60);

#[automock]
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn dashboard_stats(&self) -> BookingResult<DashboardStats>;
    async fn admin_stats(&self) -> BookingResult<AdminStats>;
    async fn profile(&self) -> BookingResult<BusinessProfile>;
    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> BookingResult<BusinessProfile>;
}

#[async_trait]
impl StatsApi for ApiClient {
    async fn dashboard_stats(&self) -> BookingResult<DashboardStats> {
        self.dashboard_stats().await
    }

    async fn admin_stats(&self) -> BookingResult<AdminStats> {
        self.admin_stats().await
    }

    async fn profile(&self) -> BookingResult<BusinessProfile> {
        self.profile().await
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> BookingResult<BusinessProfile> {
        self.update_profile(request).await
    }
}

pub struct StatsHub {
    api: Arc<dyn StatsApi>,
    cache: Arc<QueryCache>,
}

impl StatsHub {
    pub fn new(api: Arc<dyn StatsApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// Owner dashboard headline figures, reused for five minutes.
    pub async fn dashboard(&self) -> BookingResult<Arc<DashboardStats>> {
        self.cache
            .fetch_with(QueryKey::new("dashboard-stats"), STATS_STALE, || {
                self.api.dashboard_stats()
            })
            .await
    }

    /// Platform-wide figures for the super-admin view.
    pub async fn admin(&self) -> BookingResult<Arc<AdminStats>> {
        self.cache
            .fetch_with(QueryKey::new("admin-stats"), STATS_STALE, || {
                self.api.admin_stats()
            })
            .await
    }
}

pub struct ProfileForm {
    profile: Option<Arc<BusinessProfile>>,
    save: MutationState<()>,
    api: Arc<dyn StatsApi>,
    cache: Arc<QueryCache>,
}

impl ProfileForm {
    pub fn new(api: Arc<dyn StatsApi>, cache: Arc<QueryCache>) -> Self {
        Self {
            profile: None,
            save: MutationState::Idle,
            api,
            cache,
        }
    }

    pub fn profile(&self) -> Option<&BusinessProfile> {
        self.profile.as_deref()
    }

    pub fn save_state(&self) -> &MutationState<()> {
        &self.save
    }

    pub async fn load(&mut self) -> BookingResult<()> {
        let loaded = self
            .cache
            .fetch_with(QueryKey::new("profile"), STATS_STALE, || self.api.profile())
            .await?;
        self.profile = Some(loaded);
        Ok(())
    }

    /// Saves profile edits and replaces the cached copy with the response.
    pub async fn save(&mut self, request: UpdateProfileRequest) -> BookingResult<()> {
        self.save = MutationState::Pending;
        match self.api.update_profile(&request).await {
            Ok(updated) => {
                self.save = MutationState::Success(());
                self.cache.invalidate_family("profile");
                self.profile = Some(Arc::new(updated));
                Ok(())
            }
            Err(err) => {
                self.save = MutationState::Error(err.user_message());
                Err(err)
            }
        }
    }
}

//! Business profile settings.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::profile::{BusinessProfile, UpdateProfileRequest};

use crate::ApiClient;

impl ApiClient {
    pub async fn profile(&self) -> BookingResult<BusinessProfile> {
        self.get_json("/users/profile", &[]).await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> BookingResult<BusinessProfile> {
        self.patch_json("/users/profile", request).await
    }
}

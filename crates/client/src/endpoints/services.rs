//! Tenant service CRUD over `/services`.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::pagination::Paginated;
use citaflow_core::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};

use super::ListQuery;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_services(&self, query: &ListQuery) -> BookingResult<Paginated<Service>> {
        self.get_json("/services", &query.to_pairs()).await
    }

    pub async fn create_service(&self, request: &CreateServiceRequest) -> BookingResult<Service> {
        self.post_json("/services", request).await
    }

    pub async fn update_service(
        &self,
        id: &str,
        request: &UpdateServiceRequest,
    ) -> BookingResult<Service> {
        self.patch_json(&format!("/services/{id}"), request).await
    }

    pub async fn delete_service(&self, id: &str) -> BookingResult<()> {
        self.delete_resource(&format!("/services/{id}")).await
    }
}

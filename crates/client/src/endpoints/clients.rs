//! Tenant client CRUD over `/clientes`.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::client::{Client, CreateClientRequest, UpdateClientRequest};
use citaflow_core::models::pagination::Paginated;

use super::ListQuery;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_clients(&self, query: &ListQuery) -> BookingResult<Paginated<Client>> {
        self.get_json("/clientes", &query.to_pairs()).await
    }

    pub async fn create_client(&self, request: &CreateClientRequest) -> BookingResult<Client> {
        self.post_json("/clientes", request).await
    }

    pub async fn update_client(
        &self,
        id: &str,
        request: &UpdateClientRequest,
    ) -> BookingResult<Client> {
        self.patch_json(&format!("/clientes/{id}"), request).await
    }

    pub async fn delete_client(&self, id: &str) -> BookingResult<()> {
        self.delete_resource(&format!("/clientes/{id}")).await
    }
}

//! Employee CRUD plus the weekly availability template.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::employee::{
    AvailabilitySlot, CreateEmployeeRequest, Employee, UpdateAvailabilityRequest,
    UpdateEmployeeRequest, validate_weekly_availability,
};
use citaflow_core::models::pagination::Paginated;

use super::ListQuery;
use crate::ApiClient;

impl ApiClient {
    pub async fn list_employees(&self, query: &ListQuery) -> BookingResult<Paginated<Employee>> {
        self.get_json("/employees", &query.to_pairs()).await
    }

    pub async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
    ) -> BookingResult<Employee> {
        self.post_json("/employees", request).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> BookingResult<Employee> {
        self.patch_json(&format!("/employees/{id}"), request).await
    }

    pub async fn delete_employee(&self, id: &str) -> BookingResult<()> {
        self.delete_resource(&format!("/employees/{id}")).await
    }

    /// The 7-entry weekly schedule template for one employee.
    pub async fn employee_availability(
        &self,
        employee_id: &str,
    ) -> BookingResult<Vec<AvailabilitySlot>> {
        self.get_json(&format!("/employees/{employee_id}/availability"), &[])
            .await
    }

    /// Replaces the weekly template. The 7-slot/one-per-day invariant is
    /// checked here before anything goes over the wire.
    pub async fn update_employee_availability(
        &self,
        employee_id: &str,
        request: &UpdateAvailabilityRequest,
    ) -> BookingResult<Vec<AvailabilitySlot>> {
        validate_weekly_availability(&request.availability)?;
        self.patch_json(&format!("/employees/{employee_id}/availability"), request)
            .await
    }
}

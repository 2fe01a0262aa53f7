//! Tenant appointment CRUD over `/citas`.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::appointment::{
    Appointment, AppointmentFilter, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use citaflow_core::models::pagination::Paginated;

use crate::ApiClient;

/// Pagination plus the server-side filters `GET /citas` accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: AppointmentFilter,
}

impl AppointmentQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(start) = &self.filter.start_date {
            pairs.push(("startDate", start.to_rfc3339()));
        }
        if let Some(end) = &self.filter.end_date {
            pairs.push(("endDate", end.to_rfc3339()));
        }
        if let Some(employee_id) = &self.filter.employee_id {
            pairs.push(("employeeId", employee_id.clone()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_appointments(
        &self,
        query: &AppointmentQuery,
    ) -> BookingResult<Paginated<Appointment>> {
        self.get_json("/citas", &query.to_pairs()).await
    }

    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> BookingResult<Appointment> {
        self.post_json("/citas", request).await
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        request: &UpdateAppointmentRequest,
    ) -> BookingResult<Appointment> {
        self.patch_json(&format!("/citas/{id}"), request).await
    }

    pub async fn delete_appointment(&self, id: &str) -> BookingResult<()> {
        self.delete_resource(&format!("/citas/{id}")).await
    }
}

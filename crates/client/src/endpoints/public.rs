//! Unauthenticated endpoints behind the public booking link.

use citaflow_core::errors::BookingResult;
use citaflow_core::models::appointment::Appointment;
use citaflow_core::models::booking::{AvailabilityQuery, PublicBookingRequest};
use citaflow_core::models::employee::Employee;
use citaflow_core::models::service::Service;

use crate::ApiClient;

impl ApiClient {
    /// A tenant's bookable services.
    pub async fn public_services(&self, user_id: &str) -> BookingResult<Vec<Service>> {
        self.get_json(&format!("/public/services/{user_id}"), &[])
            .await
    }

    /// A tenant's employees.
    pub async fn public_employees(&self, user_id: &str) -> BookingResult<Vec<Employee>> {
        self.get_json(&format!("/public/employees/{user_id}"), &[])
            .await
    }

    /// Open start times for one day, as `"HH:mm"` slot strings. The slot
    /// computation (conflicts, working hours, service duration) is entirely
    /// server-side.
    pub async fn public_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> BookingResult<Vec<String>> {
        let pairs = [
            ("date", query.date.format("%Y-%m-%d").to_string()),
            ("employeeId", query.employee_id.clone()),
            ("serviceId", query.service_id.clone()),
        ];
        self.get_json("/public/availability", &pairs).await
    }

    /// Creates an appointment from wizard data; the response echoes the
    /// booked appointment with its display summaries.
    pub async fn book_appointment(&self, request: &PublicBookingRequest) -> BookingResult<Appointment> {
        self.post_json("/public/book", request).await
    }

    /// Cancels via a client-held cancellation token, no authentication.
    pub async fn cancel_appointment(&self, token: &str) -> BookingResult<Appointment> {
        self.patch_empty(&format!("/public/cancel/{token}")).await
    }
}

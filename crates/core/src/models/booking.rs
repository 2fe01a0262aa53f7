use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /public/book`, assembled by the booking wizard once every
/// step has a selection. `date` serializes as `yyyy-MM-dd` and `start_time`
/// is a bare `"HH:mm"` slot string as returned by the availability endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBookingRequest {
    /// Id of the business being booked, taken from the public link.
    pub user_id: String,
    pub service_id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parameters of `GET /public/availability`. A query is only constructed
/// when all three selections are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub employee_id: String,
    pub service_id: String,
}

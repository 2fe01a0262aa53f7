use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized display copy of the booked client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Denormalized display copy of the booked service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub name: String,
    pub duration: u32,
    pub price: f64,
}

/// Denormalized display copy of the assigned employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// An appointment as returned by `/citas`. Ids are opaque backend strings;
/// the embedded summaries exist so lists and calendars render without extra
/// lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(rename = "clienteId")]
    pub client_id: String,
    pub service_id: String,
    pub employee_id: String,

    #[serde(rename = "cliente")]
    pub client: ClientSummary,
    pub service: ServiceSummary,
    pub employee: EmployeeSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(rename = "clienteId")]
    pub client_id: String,
    pub service_id: String,
    pub employee_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// PATCH body for `/citas/:id`; unset fields are omitted entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[serde(rename = "clienteId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Server-side filters accepted by `GET /citas` alongside pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub employee_id: Option<String>,
}

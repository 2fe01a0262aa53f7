use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription tier of a tenant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Plan {
    Free,
    Profesional,
    Empresa,
}

/// Role claim carried in the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    SuperAdmin,
    Employee,
}

/// Usage counters the backend denormalizes onto each business row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageCounts {
    pub employees: u32,
    pub services: u32,
    #[serde(rename = "clientes")]
    pub clients: u32,
    #[serde(rename = "citas")]
    pub appointments: u32,
}

/// A tenant account as listed in the super-admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUser {
    pub id: String,
    pub email: String,
    pub business_name: String,
    pub role: Role,
    pub plan: Plan,
    pub max_employees: u32,
    pub max_services: u32,
    #[serde(default)]
    pub plan_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_count")]
    pub counts: UsageCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_businesses: u64,
    #[serde(rename = "totalCitas")]
    pub total_appointments: u64,
    /// Monthly recurring revenue across paid plans.
    pub mrr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    pub plan: Plan,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub current: f64,
    pub last: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub total: f64,
}

/// Owner-dashboard figures from `GET /reports/dashboard-stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub income: IncomeSummary,
    #[serde(rename = "totalAppts")]
    pub total_appointments: u64,
    pub chart_data: Vec<ChartPoint>,
}

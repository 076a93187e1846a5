// --- File: crates/lokal_gateway/src/models/admin.rs ---
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::agent::{AgentStatus, AgentTier};
use super::user::UserStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_agents: i64,
    pub total_transactions: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub phone_number: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub status: UserStatus,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserList {
    pub users: Vec<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAgent {
    pub id: String,
    pub agent_code: String,
    pub business_name: String,
    pub phone_number: String,
    pub tier: AgentTier,
    pub status: AgentStatus,
    #[serde(default)]
    pub total_sales: f64,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAgentList {
    pub agents: Vec<AdminAgent>,
}

// --- Analytics ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_users: i64,
    pub total_agents: i64,
    pub active_agents: i64,
    pub total_transactions: i64,
    pub total_revenue: f64,
    pub today_new_users: i64,
    pub today_transactions: i64,
    pub today_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    pub transactions: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueByProduct {
    pub wifi: f64,
    pub electricity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueAnalytics {
    pub daily_revenue: Vec<DailyRevenue>,
    pub revenue_by_product: RevenueByProduct,
}

// --- Audit log ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub action: String,
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogList {
    pub audit_logs: Vec<AuditLogEntry>,
}

// --- Bulk import ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportUser {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportUsersRequest {
    pub users: Vec<ImportUser>,
}

/// One rejected row of a bulk import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: i64,
    #[serde(default)]
    pub errors: Vec<ImportError>,
}

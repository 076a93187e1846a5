// --- File: crates/lokal_gateway/src/api/admin.rs ---
use serde::Serialize;

use crate::gateway::{Download, Gateway, RequestOptions};
use crate::models::{
    AdminAgent, AdminAgentList, AdminUser, AdminUserList, AgentStatus, AgentTier, Analytics,
    AuditLogEntry, AuditLogList, DashboardStats, ImportReport, ImportUser, ImportUsersRequest,
    KycStatus, MessageResponse, RevenueAnalytics, UserStatus,
};
use crate::outcome::ApiResult;

impl Gateway {
    pub async fn admin_dashboard(&self) -> ApiResult<DashboardStats> {
        self.request("/admin/dashboard", RequestOptions::get()).await
    }

    pub async fn admin_users(&self) -> ApiResult<Vec<AdminUser>> {
        self.request::<AdminUserList, _>("/admin/users", RequestOptions::get())
            .await
            .map(|list| list.users)
    }

    pub async fn admin_agents(&self) -> ApiResult<Vec<AdminAgent>> {
        self.request::<AdminAgentList, _>("/admin/agents", RequestOptions::get())
            .await
            .map(|list| list.agents)
    }

    pub async fn analytics(&self) -> ApiResult<Analytics> {
        self.request("/admin/analytics", RequestOptions::get()).await
    }

    /// Revenue for the last seven days and split by product.
    pub async fn revenue_analytics(&self) -> ApiResult<RevenueAnalytics> {
        self.request("/admin/analytics/revenue", RequestOptions::get())
            .await
    }

    pub async fn audit_logs(&self) -> ApiResult<Vec<AuditLogEntry>> {
        self.request::<AuditLogList, _>("/admin/audit-logs", RequestOptions::get())
            .await
            .map(|list| list.audit_logs)
    }

    /// `users_export.csv`
    pub async fn export_users(&self) -> ApiResult<Download> {
        self.download("/admin/users/export", RequestOptions::get())
            .await
    }

    /// Creates users in bulk. Rows the backend rejects come back in
    /// [`ImportReport::errors`]; the call itself still succeeds.
    pub async fn import_users(&self, users: Vec<ImportUser>) -> ApiResult<ImportReport> {
        self.request(
            "/admin/users/import",
            RequestOptions::post(ImportUsersRequest { users }),
        )
        .await
    }

    /// `agents_export.csv`
    pub async fn export_agents(&self) -> ApiResult<Download> {
        self.download("/admin/agents/export", RequestOptions::get())
            .await
    }

    // --- Status changes (query-parameter PUTs) ---

    pub async fn update_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> ApiResult<MessageResponse> {
        self.request(
            &format!("/admin/users/{}/status", user_id),
            RequestOptions::put_empty().param("new_status", wire_name(&status)),
        )
        .await
    }

    pub async fn update_kyc_status(
        &self,
        user_id: &str,
        status: KycStatus,
    ) -> ApiResult<MessageResponse> {
        self.request(
            &format!("/admin/users/{}/kyc", user_id),
            RequestOptions::put_empty().param("new_status", wire_name(&status)),
        )
        .await
    }

    pub async fn update_agent_tier(
        &self,
        agent_id: &str,
        tier: AgentTier,
    ) -> ApiResult<MessageResponse> {
        self.request(
            &format!("/admin/agents/{}/tier", agent_id),
            RequestOptions::put_empty().param("new_tier", wire_name(&tier)),
        )
        .await
    }

    pub async fn update_agent_status(
        &self,
        agent_id: &str,
        status: AgentStatus,
    ) -> ApiResult<MessageResponse> {
        self.request(
            &format!("/admin/agents/{}/status", agent_id),
            RequestOptions::put_empty().param("new_status", wire_name(&status)),
        )
        .await
    }
}

/// The JSON string form of a unit enum variant, e.g. `SUSPENDED`.
fn wire_name<E: Serialize>(value: &E) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_uses_serde_rename() {
        assert_eq!(wire_name(&UserStatus::Deactivated), "DEACTIVATED");
        assert_eq!(wire_name(&AgentTier::Platinum), "PLATINUM");
        assert_eq!(wire_name(&KycStatus::Verified), "VERIFIED");
    }
}

// --- File: crates/lokal_gateway/src/api/agent.rs ---
use crate::gateway::{Download, Gateway, RequestOptions};
use crate::models::{
    AgentCustomer, AgentCustomerCreated, AgentCustomerDetail, AgentCustomerList, AgentDashboard,
    AgentRegisterRequest, AgentRegistration, AgentSale, AgentSaleRequest, AlertSettings,
    AlertSettingsUpdated, FloatAlerts, FloatTopupRequest, FloatTopupResponse, NewAgentCustomer,
    SalesReport,
};
use crate::outcome::ApiResult;

impl Gateway {
    /// Turns the signed-in user into an agent.
    pub async fn register_agent(
        &self,
        request: &AgentRegisterRequest,
    ) -> ApiResult<AgentRegistration> {
        self.request("/agent/register", RequestOptions::post(request))
            .await
    }

    pub async fn agent_dashboard(&self) -> ApiResult<AgentDashboard> {
        self.request("/agent/dashboard", RequestOptions::get()).await
    }

    pub async fn topup_float(&self, amount: f64) -> ApiResult<FloatTopupResponse> {
        self.request(
            "/agent/float/topup",
            RequestOptions::post(FloatTopupRequest { amount }),
        )
        .await
    }

    /// Sells a package to a customer out of the agent's float.
    pub async fn agent_sale(&self, sale: &AgentSaleRequest) -> ApiResult<AgentSale> {
        self.request("/agent/sale", RequestOptions::post(sale)).await
    }

    pub async fn sales_report(&self) -> ApiResult<SalesReport> {
        self.request("/agent/sales/report", RequestOptions::get())
            .await
    }

    /// CSV of the agent's sales.
    pub async fn export_sales(&self) -> ApiResult<Download> {
        self.download("/agent/sales/export", RequestOptions::get())
            .await
    }

    pub async fn agent_customers(&self) -> ApiResult<Vec<AgentCustomer>> {
        self.request::<AgentCustomerList, _>("/agent/customers", RequestOptions::get())
            .await
            .map(|list| list.customers)
    }

    pub async fn add_agent_customer(
        &self,
        customer: &NewAgentCustomer,
    ) -> ApiResult<AgentCustomerCreated> {
        self.request("/agent/customers", RequestOptions::post(customer))
            .await
    }

    /// One customer with their purchase history.
    pub async fn agent_customer(&self, customer_id: &str) -> ApiResult<AgentCustomerDetail> {
        self.request(
            &format!("/agent/customers/{}", customer_id),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn float_alerts(&self) -> ApiResult<FloatAlerts> {
        self.request("/agent/alerts", RequestOptions::get()).await
    }

    pub async fn update_alert_settings(
        &self,
        low_float_threshold: f64,
    ) -> ApiResult<AlertSettingsUpdated> {
        self.request(
            "/agent/alerts/settings",
            RequestOptions::put(AlertSettings {
                low_float_threshold,
            }),
        )
        .await
    }
}

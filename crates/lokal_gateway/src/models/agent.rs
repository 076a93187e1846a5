// --- File: crates/lokal_gateway/src/models/agent.rs ---
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Spaza,
    Trader,
    Community,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    Pending,
    Active,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Wifi,
    Electricity,
}

// --- Registration & dashboard ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRegisterRequest {
    pub business_name: String,
    pub business_type: BusinessType,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRegistration {
    pub message: String,
    pub agent_code: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDashboard {
    pub agent_code: String,
    pub business_name: String,
    pub tier: AgentTier,
    pub float_balance: f64,
    pub commission_balance: f64,
    pub total_sales: f64,
    pub monthly_sales: f64,
    pub status: AgentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatTopupRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatTopupResponse {
    pub message: String,
    pub new_balance: f64,
}

// --- Sales ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSaleRequest {
    pub customer_phone: String,
    pub product_type: ProductType,
    pub package_id: String,
    /// Required when selling electricity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSale {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    pub package_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,
    pub commission_earned: f64,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPeriod {
    pub sales: f64,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub sales: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub today: SalesPeriod,
    pub week: SalesPeriod,
    pub month: SalesPeriod,
    pub daily_breakdown: Vec<DailySales>,
    pub total_sales: f64,
    pub commission_balance: f64,
}

// --- Customers ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCustomer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub total_purchases: f64,
    #[serde(default, with = "super::timestamp::option")]
    pub last_purchase_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "super::timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCustomerList {
    pub customers: Vec<AgentCustomer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAgentCustomer {
    pub customer_phone: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCustomerCreated {
    pub message: String,
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPurchase {
    pub id: String,
    pub product_type: ProductType,
    pub product_name: String,
    pub amount: f64,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCustomerDetail {
    pub customer: AgentCustomer,
    pub purchase_history: Vec<CustomerPurchase>,
}

// --- Float alerts ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatAlert {
    pub id: String,
    pub alert_type: String,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub current_balance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    pub is_read: bool,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatAlerts {
    pub alerts: Vec<FloatAlert>,
    pub current_float: f64,
    pub low_float_threshold: f64,
    pub is_low: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    pub low_float_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettingsUpdated {
    pub message: String,
    pub low_float_threshold: f64,
}

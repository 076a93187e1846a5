// --- File: crates/lokal_gateway/src/models/wifi.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub data_limit_mb: i64,
    pub validity_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiPackageList {
    pub packages: Vec<WifiPackage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiPurchaseRequest {
    pub package_id: String,
}

/// Outcome of `POST /wifi/purchase`.
///
/// Backend versions disagree on which fields they send, so every field is
/// optional and absent fields are left out when re-serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WifiPurchase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_limit_mb: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_points_earned: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    Unused,
    Active,
    Expired,
    Depleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiVoucher {
    pub id: String,
    pub voucher_code: String,
    pub package_name: String,
    pub status: VoucherStatus,
    pub data_limit_mb: i64,
    #[serde(default)]
    pub data_used_mb: i64,
    pub validity_hours: i64,
    #[serde(default, with = "super::timestamp::option")]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiVoucherList {
    pub vouchers: Vec<WifiVoucher>,
}

// --- File: crates/lokal_gateway/src/models/electricity.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    /// A fixed number of kWh credited to the meter.
    Units,
    /// Unmetered use for a number of days.
    Unlimited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub package_type: PackageType,
    #[serde(default)]
    pub kwh_amount: Option<f64>,
    #[serde(default)]
    pub validity_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityPackageList {
    pub packages: Vec<ElectricityPackage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeterStatus {
    On,
    Off,
    Tampered,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    pub id: String,
    pub meter_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub kwh_balance: f64,
    pub status: MeterStatus,
    #[serde(default, with = "super::timestamp::option")]
    pub unlimited_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterList {
    pub meters: Vec<Meter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterMeterRequest {
    pub meter_number: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterMeterResponse {
    pub message: String,
    pub meter_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityPurchaseRequest {
    pub package_id: String,
    pub meter_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityPurchase {
    pub message: String,
    pub package_name: String,
    pub meter_number: String,
    pub reference: String,
}

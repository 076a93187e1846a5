// --- File: crates/lokal_gateway/src/models/settings.rs ---
//! Admin configuration records under `/admin/settings`.
//!
//! Each record has a matching draft: the editable subset an admin submits
//! on create or update. `Default` on a draft yields the values a new-record
//! form starts with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Payment gateways ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayType {
    #[default]
    Ozow,
    Payfast,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEnvironment {
    #[default]
    Sandbox,
    Production,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentGateway {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GatewayType,
    pub is_active: bool,
    #[serde(default)]
    pub merchant_id: Option<String>,
    /// Secret key. Shown only to admins.
    #[serde(default)]
    pub api_key: Option<String>,
    pub environment: GatewayEnvironment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentGatewayDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GatewayType,
    pub is_active: bool,
    pub merchant_id: Option<String>,
    pub api_key: Option<String>,
    pub environment: GatewayEnvironment,
}

impl Default for PaymentGatewayDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: GatewayType::default(),
            is_active: true,
            merchant_id: None,
            api_key: None,
            environment: GatewayEnvironment::Sandbox,
        }
    }
}

impl From<&PaymentGateway> for PaymentGatewayDraft {
    fn from(record: &PaymentGateway) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind,
            is_active: record.is_active,
            merchant_id: record.merchant_id.clone(),
            api_key: record.api_key.clone(),
            environment: record.environment,
        }
    }
}

// --- Bank accounts ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Current,
    Savings,
    Business,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub bank_name: String,
    /// Account holder.
    pub account_name: String,
    pub account_number: String,
    pub branch_code: String,
    pub account_type: AccountType,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDraft {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub branch_code: String,
    pub account_type: AccountType,
    pub is_primary: bool,
}

impl From<&BankAccount> for BankAccountDraft {
    fn from(record: &BankAccount) -> Self {
        Self {
            bank_name: record.bank_name.clone(),
            account_name: record.account_name.clone(),
            account_number: record.account_number.clone(),
            branch_code: record.branch_code.clone(),
            account_type: record.account_type,
            is_primary: record.is_primary,
        }
    }
}

// --- IoT devices ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    #[default]
    WifiController,
    ElectricityMeter,
    PrepaidMeter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Online,
    Offline,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IotDevice {
    pub id: String,
    pub name: String,
    pub device_type: DeviceType,
    pub serial_number: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub status: DeviceStatus,
    #[serde(default, with = "super::timestamp::option")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Status and last-seen are reported by the device, never edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IotDeviceDraft {
    pub name: String,
    pub device_type: DeviceType,
    pub serial_number: String,
    pub ip_address: Option<String>,
    pub location: Option<String>,
}

impl From<&IotDevice> for IotDeviceDraft {
    fn from(record: &IotDevice) -> Self {
        Self {
            name: record.name.clone(),
            device_type: record.device_type,
            serial_number: record.serial_number.clone(),
            ip_address: record.ip_address.clone(),
            location: record.location.clone(),
        }
    }
}

// --- File: crates/lokal_gateway/src/models/user.rs ---
use serde::{Deserialize, Serialize};

use super::agent::AgentTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Suspended,
    Deactivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Agent,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub id: Option<String>,
    pub balance: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    pub agent_code: String,
    pub business_name: String,
    pub tier: AgentTier,
    pub float_balance: f64,
    pub commission_balance: f64,
}

/// `GET /users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub phone_number: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub kyc_status: KycStatus,
    pub status: UserStatus,
    pub referral_code: Option<String>,
    #[serde(default)]
    pub loyalty_points: i64,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default)]
    pub wallet: Option<WalletSummary>,
    #[serde(default)]
    pub agent: Option<AgentSummary>,
}

fn default_role() -> UserRole {
    UserRole::User
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

// --- File: crates/lokal_gateway/src/models/wallet.rs ---
use serde::{Deserialize, Serialize};

/// `GET /wallet/balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub balance: f64,
    pub currency: String,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    pub daily_spent: f64,
    pub monthly_spent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Eft,
    Agent,
    Voucher,
    Wallet,
    Snapscan,
    Zapper,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopupRequest {
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopupResponse {
    pub message: String,
    pub reference: String,
    pub new_balance: f64,
}

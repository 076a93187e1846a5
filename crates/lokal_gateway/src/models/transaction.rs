// --- File: crates/lokal_gateway/src/models/transaction.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Topup,
    Purchase,
    Transfer,
    Refund,
    Commission,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Reversed,
}

/// One wallet ledger entry, as listed newest first by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_before: Option<f64>,
    pub balance_after: f64,
    pub reference: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// `GET /transactions/{id}/receipt`, inside its `receipt` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_number: String,
    pub date: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub fee: f64,
    pub total: f64,
    pub balance_after: f64,
    pub status: TransactionStatus,
    pub payment_method: String,
    pub platform: String,
    pub support_email: String,
    pub support_phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptEnvelope {
    pub receipt: Receipt,
}

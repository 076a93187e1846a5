// --- File: crates/lokal_gateway/src/api/transactions.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{Receipt, ReceiptEnvelope};
use crate::outcome::ApiResult;

impl Gateway {
    /// A printable receipt for one of the user's own transactions.
    pub async fn transaction_receipt(&self, transaction_id: &str) -> ApiResult<Receipt> {
        self.request::<ReceiptEnvelope, _>(
            &format!("/transactions/{}/receipt", transaction_id),
            RequestOptions::get(),
        )
        .await
        .map(|envelope| envelope.receipt)
    }
}

// --- File: crates/lokal_gateway/src/api/wallet.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{
    PaymentMethod, TopupRequest, TopupResponse, Transaction, TransactionList, WalletBalance,
};
use crate::outcome::ApiResult;

impl Gateway {
    pub async fn balance(&self) -> ApiResult<WalletBalance> {
        self.request("/wallet/balance", RequestOptions::get()).await
    }

    pub async fn topup(
        &self,
        amount: f64,
        payment_method: PaymentMethod,
    ) -> ApiResult<TopupResponse> {
        let body = TopupRequest {
            amount,
            payment_method,
            idempotency_key: None,
        };
        self.request("/wallet/topup", RequestOptions::post(&body))
            .await
    }

    /// Recent wallet transactions, newest first as the backend orders them.
    pub async fn transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.request::<TransactionList, _>("/wallet/transactions", RequestOptions::get())
            .await
            .map(|list| list.transactions)
    }
}

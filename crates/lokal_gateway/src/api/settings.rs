// --- File: crates/lokal_gateway/src/api/settings.rs ---
//! Admin configuration CRUD. These routes return bare JSON arrays and the
//! created or updated record itself.

use crate::gateway::{Gateway, RequestOptions};
use crate::models::{
    BankAccount, BankAccountDraft, IotDevice, IotDeviceDraft, MessageResponse, PaymentGateway,
    PaymentGatewayDraft,
};
use crate::outcome::ApiResult;

const PAYMENT_GATEWAYS: &str = "/admin/settings/payment-gateways";
const BANK_ACCOUNTS: &str = "/admin/settings/bank-accounts";
const IOT_DEVICES: &str = "/admin/settings/iot-devices";

impl Gateway {
    // --- Payment gateways ---

    pub async fn payment_gateways(&self) -> ApiResult<Vec<PaymentGateway>> {
        self.request(PAYMENT_GATEWAYS, RequestOptions::get()).await
    }

    pub async fn create_payment_gateway(
        &self,
        draft: &PaymentGatewayDraft,
    ) -> ApiResult<PaymentGateway> {
        self.request(PAYMENT_GATEWAYS, RequestOptions::post(draft))
            .await
    }

    pub async fn update_payment_gateway(
        &self,
        id: &str,
        draft: &PaymentGatewayDraft,
    ) -> ApiResult<PaymentGateway> {
        self.request(
            &format!("{}/{}", PAYMENT_GATEWAYS, id),
            RequestOptions::put(draft),
        )
        .await
    }

    pub async fn delete_payment_gateway(&self, id: &str) -> ApiResult<MessageResponse> {
        self.request(
            &format!("{}/{}", PAYMENT_GATEWAYS, id),
            RequestOptions::delete(),
        )
        .await
    }

    // --- Bank accounts ---

    pub async fn bank_accounts(&self) -> ApiResult<Vec<BankAccount>> {
        self.request(BANK_ACCOUNTS, RequestOptions::get()).await
    }

    pub async fn create_bank_account(&self, draft: &BankAccountDraft) -> ApiResult<BankAccount> {
        self.request(BANK_ACCOUNTS, RequestOptions::post(draft)).await
    }

    pub async fn update_bank_account(
        &self,
        id: &str,
        draft: &BankAccountDraft,
    ) -> ApiResult<BankAccount> {
        self.request(
            &format!("{}/{}", BANK_ACCOUNTS, id),
            RequestOptions::put(draft),
        )
        .await
    }

    pub async fn delete_bank_account(&self, id: &str) -> ApiResult<MessageResponse> {
        self.request(&format!("{}/{}", BANK_ACCOUNTS, id), RequestOptions::delete())
            .await
    }

    // --- IoT devices ---

    pub async fn iot_devices(&self) -> ApiResult<Vec<IotDevice>> {
        self.request(IOT_DEVICES, RequestOptions::get()).await
    }

    pub async fn create_iot_device(&self, draft: &IotDeviceDraft) -> ApiResult<IotDevice> {
        self.request(IOT_DEVICES, RequestOptions::post(draft)).await
    }

    pub async fn update_iot_device(
        &self,
        id: &str,
        draft: &IotDeviceDraft,
    ) -> ApiResult<IotDevice> {
        self.request(&format!("{}/{}", IOT_DEVICES, id), RequestOptions::put(draft))
            .await
    }

    pub async fn delete_iot_device(&self, id: &str) -> ApiResult<MessageResponse> {
        self.request(&format!("{}/{}", IOT_DEVICES, id), RequestOptions::delete())
            .await
    }

    /// Marks a device as online and stamps `last_seen`.
    pub async fn device_heartbeat(&self, id: &str) -> ApiResult<MessageResponse> {
        self.request(
            &format!("{}/{}/heartbeat", IOT_DEVICES, id),
            RequestOptions::post_empty(),
        )
        .await
    }
}

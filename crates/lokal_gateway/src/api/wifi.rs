// --- File: crates/lokal_gateway/src/api/wifi.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{
    WifiPackage, WifiPackageList, WifiPurchase, WifiPurchaseRequest, WifiVoucher, WifiVoucherList,
};
use crate::outcome::ApiResult;

impl Gateway {
    pub async fn wifi_packages(&self) -> ApiResult<Vec<WifiPackage>> {
        self.request::<WifiPackageList, _>("/wifi/packages", RequestOptions::get())
            .await
            .map(|list| list.packages)
    }

    /// Buys a package from the wallet balance and returns the voucher.
    pub async fn purchase_wifi(&self, package_id: &str) -> ApiResult<WifiPurchase> {
        let body = WifiPurchaseRequest {
            package_id: package_id.to_string(),
        };
        self.request("/wifi/purchase", RequestOptions::post(&body))
            .await
    }

    pub async fn wifi_vouchers(&self) -> ApiResult<Vec<WifiVoucher>> {
        self.request::<WifiVoucherList, _>("/wifi/vouchers", RequestOptions::get())
            .await
            .map(|list| list.vouchers)
    }
}

// --- File: crates/lokal_gateway/src/api/electricity.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{
    ElectricityPackage, ElectricityPackageList, ElectricityPurchase, ElectricityPurchaseRequest,
    Meter, MeterList, RegisterMeterRequest, RegisterMeterResponse,
};
use crate::outcome::ApiResult;

impl Gateway {
    pub async fn electricity_packages(&self) -> ApiResult<Vec<ElectricityPackage>> {
        self.request::<ElectricityPackageList, _>("/electricity/packages", RequestOptions::get())
            .await
            .map(|list| list.packages)
    }

    /// Meters registered to the signed-in user.
    pub async fn meters(&self) -> ApiResult<Vec<Meter>> {
        self.request::<MeterList, _>("/electricity/meters", RequestOptions::get())
            .await
            .map(|list| list.meters)
    }

    pub async fn register_meter(
        &self,
        meter_number: &str,
        address: Option<&str>,
    ) -> ApiResult<RegisterMeterResponse> {
        let body = RegisterMeterRequest {
            meter_number: meter_number.to_string(),
            address: address.map(str::to_string),
        };
        self.request("/electricity/meters/register", RequestOptions::post(&body))
            .await
    }

    pub async fn purchase_electricity(
        &self,
        package_id: &str,
        meter_number: &str,
    ) -> ApiResult<ElectricityPurchase> {
        let body = ElectricityPurchaseRequest {
            package_id: package_id.to_string(),
            meter_number: meter_number.to_string(),
        };
        self.request("/electricity/purchase", RequestOptions::post(&body))
            .await
    }
}

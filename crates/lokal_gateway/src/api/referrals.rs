// --- File: crates/lokal_gateway/src/api/referrals.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{ApplyReferralRequest, ReferralApplied, ReferralStats};
use crate::outcome::ApiResult;

impl Gateway {
    pub async fn apply_referral_code(&self, referral_code: &str) -> ApiResult<ReferralApplied> {
        let body = ApplyReferralRequest {
            referral_code: referral_code.to_string(),
        };
        self.request("/referrals/apply", RequestOptions::post(&body))
            .await
    }

    pub async fn referral_stats(&self) -> ApiResult<ReferralStats> {
        self.request("/referrals/stats", RequestOptions::get()).await
    }
}

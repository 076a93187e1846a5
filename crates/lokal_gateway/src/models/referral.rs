// --- File: crates/lokal_gateway/src/models/referral.rs ---
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyReferralRequest {
    pub referral_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralApplied {
    pub message: String,
    pub points_earned: i64,
    pub referrer_points_earned: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralStats {
    #[serde(default)]
    pub referral_code: Option<String>,
    pub total_referrals: i64,
    pub total_rewards_earned: f64,
    pub loyalty_points: i64,
    pub reward_per_referral: f64,
    pub points_per_referral: i64,
}

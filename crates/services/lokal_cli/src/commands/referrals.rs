// File: services/lokal_cli/src/commands/referrals.rs
use clap::Subcommand;
use lokal_common::LokalError;

use super::App;

#[derive(Subcommand, Debug)]
pub enum ReferralAction {
    /// Apply a friend's referral code
    Apply { code: String },
    /// Show your referral code and earnings
    Stats,
}

pub async fn run(app: &App, action: ReferralAction) -> Result<(), LokalError> {
    match action {
        ReferralAction::Apply { code } => app
            .output
            .emit(app.gateway.apply_referral_code(&code).await),
        ReferralAction::Stats => app.output.emit(app.gateway.referral_stats().await),
    }
}

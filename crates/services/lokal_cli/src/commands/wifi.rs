// File: services/lokal_cli/src/commands/wifi.rs
use clap::Subcommand;
use lokal_common::LokalError;

use super::App;

#[derive(Subcommand, Debug)]
pub enum WifiAction {
    /// List the WiFi packages on sale
    Packages,
    /// Buy a package with the wallet balance
    Buy { package_id: String },
    /// List purchased vouchers
    Vouchers,
}

pub async fn run(app: &App, action: WifiAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        WifiAction::Packages => app.output.emit(gateway.wifi_packages().await),
        WifiAction::Buy { package_id } => app.output.emit(gateway.purchase_wifi(&package_id).await),
        WifiAction::Vouchers => app.output.emit(gateway.wifi_vouchers().await),
    }
}

// File: services/lokal_cli/src/commands/electricity.rs
use clap::Subcommand;
use lokal_common::LokalError;

use super::App;

#[derive(Subcommand, Debug)]
pub enum ElectricityAction {
    /// List the electricity packages on sale
    Packages,
    /// List registered meters
    Meters,
    /// Register a prepaid meter
    RegisterMeter {
        meter_number: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Buy electricity for a meter
    Buy {
        package_id: String,
        #[arg(long)]
        meter: String,
    },
}

pub async fn run(app: &App, action: ElectricityAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        ElectricityAction::Packages => app.output.emit(gateway.electricity_packages().await),
        ElectricityAction::Meters => app.output.emit(gateway.meters().await),
        ElectricityAction::RegisterMeter {
            meter_number,
            address,
        } => app
            .output
            .emit(gateway.register_meter(&meter_number, address.as_deref()).await),
        ElectricityAction::Buy { package_id, meter } => app
            .output
            .emit(gateway.purchase_electricity(&package_id, &meter).await),
    }
}

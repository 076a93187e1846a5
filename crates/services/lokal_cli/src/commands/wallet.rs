// File: services/lokal_cli/src/commands/wallet.rs
use clap::Subcommand;
use lokal_common::LokalError;
use lokal_gateway::models::PaymentMethod;

use super::{wire, App};

#[derive(Subcommand, Debug)]
pub enum WalletAction {
    /// Show the wallet balance
    Balance,
    /// Add funds to the wallet
    Topup {
        /// Amount in rand
        amount: f64,
        /// CARD, EFT, AGENT, VOUCHER, WALLET, SNAPSCAN or ZAPPER
        #[arg(long, value_parser = wire::<PaymentMethod>, default_value = "card")]
        method: PaymentMethod,
    },
    /// List recent transactions
    History,
}

pub async fn run(app: &App, action: WalletAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        WalletAction::Balance => app.output.emit(gateway.balance().await),
        WalletAction::Topup { amount, method } => {
            app.output.emit(gateway.topup(amount, method).await)
        }
        WalletAction::History => app.output.emit(gateway.transactions().await),
    }
}

// File: services/lokal_cli/src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lokal_common::{init_from_config, LokalError};
use lokal_config::load_config;
use lokal_gateway::{Gateway, Session};
use tracing::{debug, info};

mod commands;
mod output;
mod prompt;

use commands::App;
use output::Output;

#[derive(Parser, Debug)]
#[command(name = "lokal")]
#[command(version, about = "Lokal wallet, WiFi and electricity client", long_about = None)]
struct Cli {
    /// Backend base URL (overrides LOKAL__API__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Where the session tokens are kept
    #[arg(long, global = true)]
    token_file: Option<PathBuf>,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    json: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in, sign out and manage the profile
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Wallet balance, top-ups and history
    Wallet {
        #[command(subcommand)]
        action: commands::wallet::WalletAction,
    },
    /// WiFi packages and vouchers
    Wifi {
        #[command(subcommand)]
        action: commands::wifi::WifiAction,
    },
    /// Prepaid electricity
    Electricity {
        #[command(subcommand)]
        action: commands::electricity::ElectricityAction,
    },
    /// Agent float, sales and customers
    Agent {
        #[command(subcommand)]
        action: commands::agent::AgentAction,
    },
    /// Platform administration
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
    /// Payment gateways, bank accounts and IoT devices
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Referral codes
    Referrals {
        #[command(subcommand)]
        action: commands::referrals::ReferralAction,
    },
    /// Show the receipt for a transaction
    Receipt {
        /// Transaction ID
        transaction_id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<LokalError>() {
                // Already printed as {"error": ...}
                Some(LokalError::ApiError(_)) => 1,
                Some(lokal_err) => {
                    eprintln!("Error: {}", lokal_err);
                    lokal_err.exit_code()
                }
                None => {
                    eprintln!("Error: {:#}", err);
                    1
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config().map_err(LokalError::from)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(token_file) = cli.token_file {
        config.session.token_file = token_file;
    }

    let _log_guard = init_from_config(&config.logging)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting lokal CLI");
    debug!("Backend: {}", config.api.base_url);
    debug!("Token file: {}", config.session.token_file.display());

    let session = Arc::new(Session::with_file(config.session.token_file.clone()));
    let gateway = Gateway::from_config(&config, session)?;
    let app = App::new(gateway, Output::new(cli.json), cli.yes);

    match cli.command {
        Command::Auth { action } => commands::auth::run(&app, action).await?,
        Command::Wallet { action } => commands::wallet::run(&app, action).await?,
        Command::Wifi { action } => commands::wifi::run(&app, action).await?,
        Command::Electricity { action } => commands::electricity::run(&app, action).await?,
        Command::Agent { action } => commands::agent::run(&app, action).await?,
        Command::Admin { action } => commands::admin::run(&app, action).await?,
        Command::Settings { action } => commands::settings::run(&app, action).await?,
        Command::Referrals { action } => commands::referrals::run(&app, action).await?,
        Command::Receipt { transaction_id } => {
            app.output
                .emit(app.gateway.transaction_receipt(&transaction_id).await)?
        }
    }

    Ok(())
}

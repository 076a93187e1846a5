// File: services/lokal_cli/src/commands/agent.rs
use std::path::PathBuf;

use clap::Subcommand;
use lokal_common::LokalError;
use lokal_gateway::models::{AgentRegisterRequest, AgentSaleRequest, BusinessType, NewAgentCustomer, ProductType};

use super::{wire, App};

#[derive(Subcommand, Debug)]
pub enum AgentAction {
    /// Apply to become an agent
    Register {
        business_name: String,
        /// SPAZA, TRADER, COMMUNITY or OTHER
        #[arg(long, value_parser = wire::<BusinessType>)]
        business_type: BusinessType,
        #[arg(long)]
        address: Option<String>,
    },
    /// Float, commission and today's sales
    Dashboard,
    /// Add float from the agent's wallet
    TopupFloat { amount: f64 },
    /// Sell a package to a customer
    Sell {
        /// Customer phone number
        customer_phone: String,
        /// WIFI or ELECTRICITY
        #[arg(long, value_parser = wire::<ProductType>)]
        product: ProductType,
        #[arg(long)]
        package: String,
        /// Required for electricity sales
        #[arg(long)]
        meter: Option<String>,
    },
    /// Sales summary for today, this week and this month
    Sales,
    /// Download the sales report as CSV
    ExportSales {
        /// Output file (defaults to the server's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the agent's customers
    Customers,
    /// Show one customer and their purchases
    Customer { customer_id: String },
    /// Add a customer
    AddCustomer {
        customer_phone: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Low-float alerts and the current threshold
    Alerts,
    /// Set the low-float alert threshold
    SetAlertThreshold { amount: f64 },
}

pub async fn run(app: &App, action: AgentAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        AgentAction::Register {
            business_name,
            business_type,
            address,
        } => {
            let request = AgentRegisterRequest {
                business_name,
                business_type,
                address,
            };
            app.output.emit(gateway.register_agent(&request).await)
        }
        AgentAction::Dashboard => app.output.emit(gateway.agent_dashboard().await),
        AgentAction::TopupFloat { amount } => app.output.emit(gateway.topup_float(amount).await),
        AgentAction::Sell {
            customer_phone,
            product,
            package,
            meter,
        } => {
            let sale = AgentSaleRequest {
                customer_phone,
                product_type: product,
                package_id: package,
                meter_number: meter,
            };
            app.output.emit(gateway.agent_sale(&sale).await)
        }
        AgentAction::Sales => app.output.emit(gateway.sales_report().await),
        AgentAction::ExportSales { output } => {
            app.output
                .save_download(gateway.export_sales().await, output, "sales_report.csv")
        }
        AgentAction::Customers => app.output.emit(gateway.agent_customers().await),
        AgentAction::Customer { customer_id } => {
            app.output.emit(gateway.agent_customer(&customer_id).await)
        }
        AgentAction::AddCustomer {
            customer_phone,
            name,
            notes,
        } => {
            let customer = NewAgentCustomer {
                customer_phone,
                customer_name: name,
                notes,
            };
            app.output.emit(gateway.add_agent_customer(&customer).await)
        }
        AgentAction::Alerts => app.output.emit(gateway.float_alerts().await),
        AgentAction::SetAlertThreshold { amount } => {
            app.output.emit(gateway.update_alert_settings(amount).await)
        }
    }
}

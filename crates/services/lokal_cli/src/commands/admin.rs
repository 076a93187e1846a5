// File: services/lokal_cli/src/commands/admin.rs
use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use lokal_common::{validation_error, LokalError};
use lokal_gateway::models::{AgentStatus, AgentTier, ImportUser, KycStatus, UserStatus};

use super::{wire, App};

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Platform totals
    Dashboard,
    /// List users
    Users,
    /// List agents
    Agents,
    /// Growth and volume figures
    Analytics,
    /// Revenue for the last seven days and per product
    Revenue,
    /// Recent audit log entries
    AuditLogs,
    /// Download all users as CSV
    ExportUsers {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download all agents as CSV
    ExportAgents {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Bulk-create users from a JSON array of
    /// {phone_number, first_name?, last_name?, email?}
    ImportUsers { file: PathBuf },
    /// ACTIVE, SUSPENDED or DEACTIVATED
    SetUserStatus {
        user_id: String,
        #[arg(value_parser = wire::<UserStatus>)]
        status: UserStatus,
    },
    /// PENDING, VERIFIED or REJECTED
    SetKycStatus {
        user_id: String,
        #[arg(value_parser = wire::<KycStatus>)]
        status: KycStatus,
    },
    /// BRONZE, SILVER, GOLD or PLATINUM
    SetAgentTier {
        agent_id: String,
        #[arg(value_parser = wire::<AgentTier>)]
        tier: AgentTier,
    },
    /// PENDING, ACTIVE or SUSPENDED
    SetAgentStatus {
        agent_id: String,
        #[arg(value_parser = wire::<AgentStatus>)]
        status: AgentStatus,
    },
}

pub async fn run(app: &App, action: AdminAction) -> Result<(), LokalError> {
    let gateway = &app.gateway;
    match action {
        AdminAction::Dashboard => app.output.emit(gateway.admin_dashboard().await),
        AdminAction::Users => app.output.emit(gateway.admin_users().await),
        AdminAction::Agents => app.output.emit(gateway.admin_agents().await),
        AdminAction::Analytics => app.output.emit(gateway.analytics().await),
        AdminAction::Revenue => app.output.emit(gateway.revenue_analytics().await),
        AdminAction::AuditLogs => app.output.emit(gateway.audit_logs().await),
        AdminAction::ExportUsers { output } => {
            app.output
                .save_download(gateway.export_users().await, output, "users.csv")
        }
        AdminAction::ExportAgents { output } => {
            app.output
                .save_download(gateway.export_agents().await, output, "agents.csv")
        }
        AdminAction::ImportUsers { file } => {
            let users = read_import_file(&file)?;
            app.output.emit(gateway.import_users(users).await)
        }
        AdminAction::SetUserStatus { user_id, status } => {
            app.output
                .emit(gateway.update_user_status(&user_id, status).await)
        }
        AdminAction::SetKycStatus { user_id, status } => {
            app.output
                .emit(gateway.update_kyc_status(&user_id, status).await)
        }
        AdminAction::SetAgentTier { agent_id, tier } => {
            app.output
                .emit(gateway.update_agent_tier(&agent_id, tier).await)
        }
        AdminAction::SetAgentStatus { agent_id, status } => {
            app.output
                .emit(gateway.update_agent_status(&agent_id, status).await)
        }
    }
}

fn read_import_file(path: &Path) -> Result<Vec<ImportUser>, LokalError> {
    let raw = fs::read_to_string(path)?;
    let users: Vec<ImportUser> = serde_json::from_str(&raw)?;
    if users.is_empty() {
        return Err(validation_error(format!("{} lists no users", path.display())));
    }
    Ok(users)
}

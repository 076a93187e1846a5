// File: services/lokal_cli/src/commands/settings.rs
//! Admin settings, driven through the console panels so the CLI gets the
//! same validation, confirmation and reload behaviour as the UI.

use clap::{Args, Subcommand};
use lokal_common::LokalError;
use lokal_console::{AdminResource, BankAccounts, ConsoleError, CrudPanel, IotDevices, PaymentGateways};
use lokal_gateway::models::{
    AccountType, BankAccountDraft, DeviceType, GatewayEnvironment, GatewayType, IotDeviceDraft,
    PaymentGatewayDraft,
};
use lokal_gateway::ApiResult;
use serde::Serialize;
use serde_json::json;

use super::{wire, App};

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Payment gateways
    Gateways {
        #[command(subcommand)]
        action: GatewayAction,
    },
    /// Settlement bank accounts
    Accounts {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// WiFi controllers and meters
    Devices {
        #[command(subcommand)]
        action: DeviceAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum GatewayAction {
    List,
    Add(GatewayFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: GatewayFields,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AccountAction {
    List,
    Add(AccountFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: AccountFields,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum DeviceAction {
    List,
    Add(DeviceFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: DeviceFields,
    },
    Delete { id: String },
    /// Mark a device online
    Heartbeat { id: String },
}

// --- Field flags ---

/// Flags left out keep the form's current value.
trait Fields {
    type Draft;
    fn apply(self, draft: &mut Self::Draft);
}

#[derive(Args, Debug)]
pub struct GatewayFields {
    #[arg(long)]
    name: Option<String>,
    /// OZOW, PAYFAST or MANUAL
    #[arg(long = "type", value_parser = wire::<GatewayType>)]
    kind: Option<GatewayType>,
    #[arg(long)]
    active: Option<bool>,
    #[arg(long)]
    merchant_id: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
    /// SANDBOX or PRODUCTION
    #[arg(long, value_parser = wire::<GatewayEnvironment>)]
    environment: Option<GatewayEnvironment>,
}

impl Fields for GatewayFields {
    type Draft = PaymentGatewayDraft;

    fn apply(self, draft: &mut PaymentGatewayDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(kind) = self.kind {
            draft.kind = kind;
        }
        if let Some(active) = self.active {
            draft.is_active = active;
        }
        if self.merchant_id.is_some() {
            draft.merchant_id = self.merchant_id;
        }
        if self.api_key.is_some() {
            draft.api_key = self.api_key;
        }
        if let Some(environment) = self.environment {
            draft.environment = environment;
        }
    }
}

#[derive(Args, Debug)]
pub struct AccountFields {
    #[arg(long)]
    bank_name: Option<String>,
    /// Account holder
    #[arg(long)]
    account_name: Option<String>,
    #[arg(long)]
    account_number: Option<String>,
    #[arg(long)]
    branch_code: Option<String>,
    /// CURRENT, SAVINGS or BUSINESS
    #[arg(long, value_parser = wire::<AccountType>)]
    account_type: Option<AccountType>,
    #[arg(long)]
    primary: Option<bool>,
}

impl Fields for AccountFields {
    type Draft = BankAccountDraft;

    fn apply(self, draft: &mut BankAccountDraft) {
        if let Some(bank_name) = self.bank_name {
            draft.bank_name = bank_name;
        }
        if let Some(account_name) = self.account_name {
            draft.account_name = account_name;
        }
        if let Some(account_number) = self.account_number {
            draft.account_number = account_number;
        }
        if let Some(branch_code) = self.branch_code {
            draft.branch_code = branch_code;
        }
        if let Some(account_type) = self.account_type {
            draft.account_type = account_type;
        }
        if let Some(primary) = self.primary {
            draft.is_primary = primary;
        }
    }
}

#[derive(Args, Debug)]
pub struct DeviceFields {
    #[arg(long)]
    name: Option<String>,
    /// WIFI_CONTROLLER, ELECTRICITY_METER or PREPAID_METER
    #[arg(long, value_parser = wire::<DeviceType>)]
    device_type: Option<DeviceType>,
    #[arg(long)]
    serial_number: Option<String>,
    #[arg(long)]
    ip_address: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

impl Fields for DeviceFields {
    type Draft = IotDeviceDraft;

    fn apply(self, draft: &mut IotDeviceDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(device_type) = self.device_type {
            draft.device_type = device_type;
        }
        if let Some(serial_number) = self.serial_number {
            draft.serial_number = serial_number;
        }
        if self.ip_address.is_some() {
            draft.ip_address = self.ip_address;
        }
        if self.location.is_some() {
            draft.location = self.location;
        }
    }
}

// --- Dispatch ---

enum Op<F> {
    List,
    Add(F),
    Edit(String, F),
    Delete(String),
}

pub async fn run(app: &App, action: SettingsAction) -> Result<(), LokalError> {
    match action {
        SettingsAction::Gateways { action } => {
            let op = match action {
                GatewayAction::List => Op::List,
                GatewayAction::Add(fields) => Op::Add(fields),
                GatewayAction::Edit { id, fields } => Op::Edit(id, fields),
                GatewayAction::Delete { id } => Op::Delete(id),
            };
            manage(app, PaymentGateways, op).await
        }
        SettingsAction::Accounts { action } => {
            let op = match action {
                AccountAction::List => Op::List,
                AccountAction::Add(fields) => Op::Add(fields),
                AccountAction::Edit { id, fields } => Op::Edit(id, fields),
                AccountAction::Delete { id } => Op::Delete(id),
            };
            manage(app, BankAccounts, op).await
        }
        SettingsAction::Devices { action } => {
            let op = match action {
                DeviceAction::List => Op::List,
                DeviceAction::Add(fields) => Op::Add(fields),
                DeviceAction::Edit { id, fields } => Op::Edit(id, fields),
                DeviceAction::Delete { id } => Op::Delete(id),
                DeviceAction::Heartbeat { id } => {
                    return app.output.emit(app.gateway.device_heartbeat(&id).await);
                }
            };
            manage(app, IotDevices, op).await
        }
    }
}

async fn manage<R, F>(app: &App, resource: R, op: Op<F>) -> Result<(), LokalError>
where
    R: AdminResource,
    R::Record: Serialize,
    F: Fields<Draft = R::Draft>,
{
    let mut panel = CrudPanel::new(resource, app.gateway.clone());
    match op {
        Op::List => {
            let listed = panel.load().await.map(|_| panel.records().to_vec());
            finish(app, listed)
        }
        Op::Add(fields) => {
            panel.open_new();
            if let Some(draft) = panel.draft_mut() {
                fields.apply(draft);
            }
            finish(app, panel.save().await)
        }
        Op::Edit(id, fields) => finish(app, edit(&mut panel, &id, fields).await),
        Op::Delete(id) => {
            let deleted = panel.delete(&id, app.confirmer()).await;
            finish(app, deleted.map(|deleted| json!({ "id": id, "deleted": deleted })))
        }
    }
}

async fn edit<R, F>(panel: &mut CrudPanel<R>, id: &str, fields: F) -> Result<R::Record, ConsoleError>
where
    R: AdminResource,
    F: Fields<Draft = R::Draft>,
{
    panel.load().await?;
    panel.open_edit(id)?;
    if let Some(draft) = panel.draft_mut() {
        fields.apply(draft);
    }
    panel.save().await
}

/// Backend failures print as an error envelope; local ones (validation,
/// unknown id) go to stderr with their own exit code.
fn finish<T: Serialize>(app: &App, result: Result<T, ConsoleError>) -> Result<(), LokalError> {
    match result {
        Ok(value) => app.output.emit(ApiResult::Data(value)),
        Err(ConsoleError::Api(message)) => app.output.emit(ApiResult::<()>::Error(message)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_fields_override_only_given_flags() {
        let mut draft = PaymentGatewayDraft {
            name: "Ozow".into(),
            merchant_id: Some("M-1".into()),
            ..Default::default()
        };
        GatewayFields {
            name: None,
            kind: Some(GatewayType::Payfast),
            active: Some(false),
            merchant_id: None,
            api_key: Some("sk".into()),
            environment: None,
        }
        .apply(&mut draft);

        assert_eq!(draft.name, "Ozow");
        assert_eq!(draft.kind, GatewayType::Payfast);
        assert!(!draft.is_active);
        assert_eq!(draft.merchant_id.as_deref(), Some("M-1"));
        assert_eq!(draft.api_key.as_deref(), Some("sk"));
        assert_eq!(draft.environment, GatewayEnvironment::Sandbox);
    }

    #[test]
    fn test_account_fields_fill_new_form() {
        let mut draft = BankAccountDraft::default();
        AccountFields {
            bank_name: Some("FNB".into()),
            account_name: Some("Lokal".into()),
            account_number: Some("62000000001".into()),
            branch_code: Some("250655".into()),
            account_type: None,
            primary: Some(true),
        }
        .apply(&mut draft);

        assert_eq!(draft.bank_name, "FNB");
        assert_eq!(draft.account_type, AccountType::Current);
        assert!(draft.is_primary);
    }
}

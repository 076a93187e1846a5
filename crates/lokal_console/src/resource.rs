// --- File: crates/lokal_console/src/resource.rs ---
//! Resource abstractions for the admin settings pages.
//!
//! An [`AdminResource`] ties a record type and its draft to the four
//! gateway calls that manage it, so one [`CrudPanel`](crate::CrudPanel)
//! drives every settings page.

use std::future::Future;
use std::pin::Pin;

use lokal_gateway::models::{
    BankAccount, BankAccountDraft, IotDevice, IotDeviceDraft, MessageResponse, PaymentGateway,
    PaymentGatewayDraft,
};
use lokal_gateway::{ApiResult, Gateway};

use crate::error::ConsoleError;

/// Type alias for a boxed, sendable future
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A backend collection an admin can list, create, update and delete.
pub trait AdminResource: Send + Sync {
    type Record: Clone + Send + Sync;
    type Draft: Clone + Default + Send + Sync;

    /// Human name of one record, used in prompts and errors.
    const LABEL: &'static str;

    fn record_id(record: &Self::Record) -> &str;

    /// Seeds an edit form from an existing record.
    fn draft_from(record: &Self::Record) -> Self::Draft;

    /// Checks required fields and normalises blank optional fields to
    /// `None`. Returns the draft to submit.
    fn prepare(draft: &Self::Draft) -> Result<Self::Draft, ConsoleError>;

    fn list<'a>(&'a self, gateway: &'a Gateway) -> BoxFuture<'a, ApiResult<Vec<Self::Record>>>;

    fn create<'a>(
        &'a self,
        gateway: &'a Gateway,
        draft: &'a Self::Draft,
    ) -> BoxFuture<'a, ApiResult<Self::Record>>;

    fn update<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
        draft: &'a Self::Draft,
    ) -> BoxFuture<'a, ApiResult<Self::Record>>;

    fn delete<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
    ) -> BoxFuture<'a, ApiResult<MessageResponse>>;
}

fn require(value: &str, field: &'static str) -> Result<(), ConsoleError> {
    if value.trim().is_empty() {
        return Err(ConsoleError::MissingField(field));
    }
    Ok(())
}

fn blank_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// --- Payment gateways ---

#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentGateways;

impl AdminResource for PaymentGateways {
    type Record = PaymentGateway;
    type Draft = PaymentGatewayDraft;

    const LABEL: &'static str = "payment gateway";

    fn record_id(record: &PaymentGateway) -> &str {
        &record.id
    }

    fn draft_from(record: &PaymentGateway) -> PaymentGatewayDraft {
        PaymentGatewayDraft::from(record)
    }

    fn prepare(draft: &PaymentGatewayDraft) -> Result<PaymentGatewayDraft, ConsoleError> {
        require(&draft.name, "name")?;
        Ok(PaymentGatewayDraft {
            name: draft.name.trim().to_string(),
            merchant_id: blank_to_none(&draft.merchant_id),
            api_key: blank_to_none(&draft.api_key),
            ..draft.clone()
        })
    }

    fn list<'a>(&'a self, gateway: &'a Gateway) -> BoxFuture<'a, ApiResult<Vec<PaymentGateway>>> {
        Box::pin(gateway.payment_gateways())
    }

    fn create<'a>(
        &'a self,
        gateway: &'a Gateway,
        draft: &'a PaymentGatewayDraft,
    ) -> BoxFuture<'a, ApiResult<PaymentGateway>> {
        Box::pin(gateway.create_payment_gateway(draft))
    }

    fn update<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
        draft: &'a PaymentGatewayDraft,
    ) -> BoxFuture<'a, ApiResult<PaymentGateway>> {
        Box::pin(gateway.update_payment_gateway(id, draft))
    }

    fn delete<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
    ) -> BoxFuture<'a, ApiResult<MessageResponse>> {
        Box::pin(gateway.delete_payment_gateway(id))
    }
}

// --- Bank accounts ---

#[derive(Debug, Clone, Copy, Default)]
pub struct BankAccounts;

impl AdminResource for BankAccounts {
    type Record = BankAccount;
    type Draft = BankAccountDraft;

    const LABEL: &'static str = "bank account";

    fn record_id(record: &BankAccount) -> &str {
        &record.id
    }

    fn draft_from(record: &BankAccount) -> BankAccountDraft {
        BankAccountDraft::from(record)
    }

    fn prepare(draft: &BankAccountDraft) -> Result<BankAccountDraft, ConsoleError> {
        require(&draft.bank_name, "bank_name")?;
        require(&draft.account_name, "account_name")?;
        require(&draft.account_number, "account_number")?;
        require(&draft.branch_code, "branch_code")?;
        Ok(BankAccountDraft {
            bank_name: draft.bank_name.trim().to_string(),
            account_name: draft.account_name.trim().to_string(),
            account_number: draft.account_number.trim().to_string(),
            branch_code: draft.branch_code.trim().to_string(),
            ..draft.clone()
        })
    }

    fn list<'a>(&'a self, gateway: &'a Gateway) -> BoxFuture<'a, ApiResult<Vec<BankAccount>>> {
        Box::pin(gateway.bank_accounts())
    }

    fn create<'a>(
        &'a self,
        gateway: &'a Gateway,
        draft: &'a BankAccountDraft,
    ) -> BoxFuture<'a, ApiResult<BankAccount>> {
        Box::pin(gateway.create_bank_account(draft))
    }

    fn update<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
        draft: &'a BankAccountDraft,
    ) -> BoxFuture<'a, ApiResult<BankAccount>> {
        Box::pin(gateway.update_bank_account(id, draft))
    }

    fn delete<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
    ) -> BoxFuture<'a, ApiResult<MessageResponse>> {
        Box::pin(gateway.delete_bank_account(id))
    }
}

// --- IoT devices ---

#[derive(Debug, Clone, Copy, Default)]
pub struct IotDevices;

impl AdminResource for IotDevices {
    type Record = IotDevice;
    type Draft = IotDeviceDraft;

    const LABEL: &'static str = "IoT device";

    fn record_id(record: &IotDevice) -> &str {
        &record.id
    }

    fn draft_from(record: &IotDevice) -> IotDeviceDraft {
        IotDeviceDraft::from(record)
    }

    fn prepare(draft: &IotDeviceDraft) -> Result<IotDeviceDraft, ConsoleError> {
        require(&draft.name, "name")?;
        require(&draft.serial_number, "serial_number")?;
        Ok(IotDeviceDraft {
            name: draft.name.trim().to_string(),
            serial_number: draft.serial_number.trim().to_string(),
            ip_address: blank_to_none(&draft.ip_address),
            location: blank_to_none(&draft.location),
            ..draft.clone()
        })
    }

    fn list<'a>(&'a self, gateway: &'a Gateway) -> BoxFuture<'a, ApiResult<Vec<IotDevice>>> {
        Box::pin(gateway.iot_devices())
    }

    fn create<'a>(
        &'a self,
        gateway: &'a Gateway,
        draft: &'a IotDeviceDraft,
    ) -> BoxFuture<'a, ApiResult<IotDevice>> {
        Box::pin(gateway.create_iot_device(draft))
    }

    fn update<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
        draft: &'a IotDeviceDraft,
    ) -> BoxFuture<'a, ApiResult<IotDevice>> {
        Box::pin(gateway.update_iot_device(id, draft))
    }

    fn delete<'a>(
        &'a self,
        gateway: &'a Gateway,
        id: &'a str,
    ) -> BoxFuture<'a, ApiResult<MessageResponse>> {
        Box::pin(gateway.delete_iot_device(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokal_gateway::models::{AccountType, GatewayEnvironment};

    #[test]
    fn test_gateway_requires_name() {
        let draft = PaymentGatewayDraft::default();
        assert_eq!(
            PaymentGateways::prepare(&draft),
            Err(ConsoleError::MissingField("name"))
        );
    }

    #[test]
    fn test_gateway_blank_secrets_become_none() {
        let draft = PaymentGatewayDraft {
            name: " PayFast ".into(),
            merchant_id: Some("   ".into()),
            api_key: Some("sk_live".into()),
            ..Default::default()
        };
        let prepared = PaymentGateways::prepare(&draft).unwrap();
        assert_eq!(prepared.name, "PayFast");
        assert_eq!(prepared.merchant_id, None);
        assert_eq!(prepared.api_key.as_deref(), Some("sk_live"));
        assert_eq!(prepared.environment, GatewayEnvironment::Sandbox);
    }

    #[test]
    fn test_bank_account_reports_first_missing_field() {
        let draft = BankAccountDraft {
            bank_name: "FNB".into(),
            account_name: "Lokal".into(),
            ..Default::default()
        };
        assert_eq!(
            BankAccounts::prepare(&draft),
            Err(ConsoleError::MissingField("account_number"))
        );
    }

    #[test]
    fn test_bank_account_keeps_type_and_primary_flag() {
        let draft = BankAccountDraft {
            bank_name: "FNB".into(),
            account_name: "Lokal".into(),
            account_number: "62000000001".into(),
            branch_code: "250655".into(),
            account_type: AccountType::Savings,
            is_primary: true,
        };
        let prepared = BankAccounts::prepare(&draft).unwrap();
        assert_eq!(prepared.account_type, AccountType::Savings);
        assert!(prepared.is_primary);
    }

    #[test]
    fn test_device_requires_serial_number() {
        let draft = IotDeviceDraft {
            name: "Tower router".into(),
            ..Default::default()
        };
        assert_eq!(
            IotDevices::prepare(&draft),
            Err(ConsoleError::MissingField("serial_number"))
        );
    }
}

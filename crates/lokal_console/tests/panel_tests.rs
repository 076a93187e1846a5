use lokal_console::{
    AlwaysConfirm, BankAccounts, ConsoleError, CrudPanel, EditSlot, IotDevices, NeverConfirm,
    PaymentGateways,
};
use lokal_gateway::models::{AccountType, BankAccountDraft, DeviceType, GatewayEnvironment};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer};

mod fixtures;

use fixtures::{ok_json, BANK_ACCOUNTS, IOT_DEVICES, PAYMENT_GATEWAYS};

fn filled_account() -> BankAccountDraft {
    BankAccountDraft {
        bank_name: "Capitec".into(),
        account_name: "Lokal Float".into(),
        account_number: "1450000001".into(),
        branch_code: "470010".into(),
        ..Default::default()
    }
}

// --- Loading ---

#[tokio::test]
async fn test_load_fills_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ok_json(json!([
            fixtures::bank_account("b1", "FNB"),
            fixtures::bank_account("b2", "Absa")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.load().await.unwrap();

    assert_eq!(panel.records().len(), 2);
    assert_eq!(panel.find("b2").unwrap().bank_name, "Absa");
    assert!(!panel.is_loading());
    assert_eq!(panel.last_error(), None);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!([fixtures::bank_account("b1", "FNB")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(fixtures::detail(503, "Database unavailable"))
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.load().await.unwrap();

    let err = panel.load().await.unwrap_err();
    assert_eq!(err, ConsoleError::Api("Database unavailable".into()));
    assert_eq!(panel.records().len(), 1);
    assert_eq!(panel.last_error(), Some("Database unavailable"));
}

// --- Editing ---

#[tokio::test]
async fn test_open_new_uses_domain_defaults() {
    let server = MockServer::start().await;
    let gateway = fixtures::admin_gateway(&server.uri());

    let mut accounts = CrudPanel::new(BankAccounts, gateway.clone());
    accounts.open_new();
    let draft = accounts.slot().draft().unwrap();
    assert_eq!(draft.account_type, AccountType::Current);
    assert!(!draft.is_primary);

    let mut gateways = CrudPanel::new(PaymentGateways, gateway.clone());
    gateways.open_new();
    let draft = gateways.slot().draft().unwrap();
    assert!(draft.is_active);
    assert_eq!(draft.environment, GatewayEnvironment::Sandbox);

    let mut devices = CrudPanel::new(IotDevices, gateway);
    devices.open_new();
    assert_eq!(
        devices.slot().draft().unwrap().device_type,
        DeviceType::WifiController
    );
}

#[tokio::test]
async fn test_open_edit_unknown_id() {
    let server = MockServer::start().await;
    let mut panel = CrudPanel::new(IotDevices, fixtures::admin_gateway(&server.uri()));

    let err = panel.open_edit("d-404").unwrap_err();
    assert_eq!(
        err,
        ConsoleError::NotFound {
            label: "IoT device",
            id: "d-404".into()
        }
    );
    assert_eq!(panel.slot(), &EditSlot::Closed);
}

#[tokio::test]
async fn test_cancel_closes_form() {
    let server = MockServer::start().await;
    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));

    panel.open_new();
    assert!(panel.slot().is_open());
    panel.cancel();
    assert!(!panel.slot().is_open());
    assert!(matches!(panel.save().await, Err(ConsoleError::NothingToSave)));
}

// --- Saving ---

#[tokio::test]
async fn test_save_new_creates_then_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BANK_ACCOUNTS))
        .and(body_json(json!({
            "bank_name": "Capitec",
            "account_name": "Lokal Float",
            "account_number": "1450000001",
            "branch_code": "470010",
            "account_type": "CURRENT",
            "is_primary": false
        })))
        .respond_with(ok_json(fixtures::bank_account("b9", "Capitec")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!([fixtures::bank_account("b9", "Capitec")])))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.open_new();
    if let Some(draft) = panel.draft_mut() {
        *draft = filled_account();
    }

    let saved = panel.save().await.unwrap();

    assert_eq!(saved.id, "b9");
    assert_eq!(panel.slot(), &EditSlot::Closed);
    assert_eq!(panel.records().len(), 1);
    assert!(!panel.is_saving());
}

#[tokio::test]
async fn test_save_succeeds_when_reload_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(fixtures::bank_account("b9", "Capitec")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(fixtures::detail(503, "Database unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.open_new();
    if let Some(draft) = panel.draft_mut() {
        *draft = filled_account();
    }

    let saved = panel.save().await.unwrap();

    assert_eq!(saved.id, "b9");
    assert_eq!(panel.slot(), &EditSlot::Closed);
    assert!(panel.records().is_empty());
    assert_eq!(panel.last_error(), Some("Database unavailable"));
}

#[tokio::test]
async fn test_save_existing_updates_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(IOT_DEVICES))
        .respond_with(ok_json(json!([fixtures::iot_device("d1", "Tower router")])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/settings/iot-devices/d1"))
        .and(body_partial_json(json!({
            "name": "Tower router",
            "serial_number": "SN-0001",
            "location": "Site C"
        })))
        .respond_with(ok_json(fixtures::iot_device("d1", "Tower router")))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(IotDevices, fixtures::admin_gateway(&server.uri()));
    panel.load().await.unwrap();
    panel.open_edit("d1").unwrap();
    if let Some(draft) = panel.draft_mut() {
        draft.location = Some(" Site C ".into());
    }

    panel.save().await.unwrap();

    assert!(!panel.slot().is_open());
}

#[tokio::test]
async fn test_blank_optionals_sent_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PAYMENT_GATEWAYS))
        .and(body_partial_json(json!({
            "name": "Ozow",
            "type": "OZOW",
            "merchant_id": null,
            "environment": "SANDBOX"
        })))
        .respond_with(ok_json(fixtures::payment_gateway("g1", "Ozow")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PAYMENT_GATEWAYS))
        .respond_with(ok_json(json!([fixtures::payment_gateway("g1", "Ozow")])))
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(PaymentGateways, fixtures::admin_gateway(&server.uri()));
    panel.open_new();
    if let Some(draft) = panel.draft_mut() {
        draft.name = "Ozow".into();
        draft.merchant_id = Some("  ".into());
    }

    panel.save().await.unwrap();
}

#[tokio::test]
async fn test_invalid_draft_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.open_new();
    if let Some(draft) = panel.draft_mut() {
        draft.account_name = "Lokal Float".into();
    }

    let err = panel.save().await.unwrap_err();

    assert_eq!(err, ConsoleError::MissingField("bank_name"));
    assert_eq!(panel.last_error(), Some("bank_name is required"));
    assert!(panel.slot().is_open());
}

#[tokio::test]
async fn test_rejected_save_keeps_form_open() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(fixtures::detail(400, "Account number already registered"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.open_new();
    if let Some(draft) = panel.draft_mut() {
        *draft = filled_account();
    }

    let err = panel.save().await.unwrap_err();

    assert_eq!(
        err,
        ConsoleError::Api("Account number already registered".into())
    );
    assert_eq!(panel.slot().draft(), Some(&filled_account()));
    assert!(!panel.is_saving());
}

// --- Deleting ---

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/settings/bank-accounts/b1"))
        .respond_with(ok_json(json!({ "message": "Bank account deleted" })))
        .expect(0)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    let deleted = panel.delete("b1", &NeverConfirm).await.unwrap();

    assert!(!deleted);
}

#[tokio::test]
async fn test_confirmed_delete_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/settings/bank-accounts/b1"))
        .respond_with(ok_json(json!({ "message": "Bank account deleted" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    let deleted = panel.delete("b1", &AlwaysConfirm).await.unwrap();

    assert!(deleted);
    assert!(panel.records().is_empty());
}

#[tokio::test]
async fn test_delete_succeeds_when_reload_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(ok_json(json!([fixtures::bank_account("b1", "FNB")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/settings/bank-accounts/b1"))
        .respond_with(ok_json(json!({ "message": "Bank account deleted" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BANK_ACCOUNTS))
        .respond_with(fixtures::detail(503, "Database unavailable"))
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    panel.load().await.unwrap();
    let deleted = panel.delete("b1", &AlwaysConfirm).await.unwrap();

    assert!(deleted);
    // The stale list is kept until a reload succeeds.
    assert_eq!(panel.records().len(), 1);
    assert_eq!(panel.last_error(), Some("Database unavailable"));
}

#[tokio::test]
async fn test_failed_delete_reports_detail() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/settings/bank-accounts/b1"))
        .respond_with(fixtures::detail(404, "Bank account not found"))
        .mount(&server)
        .await;

    let mut panel = CrudPanel::new(BankAccounts, fixtures::admin_gateway(&server.uri()));
    let err = panel.delete("b1", &AlwaysConfirm).await.unwrap_err();

    assert_eq!(err, ConsoleError::Api("Bank account not found".into()));
    assert_eq!(panel.last_error(), Some("Bank account not found"));
}

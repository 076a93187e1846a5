//! Test fixtures for panel tests

#![allow(dead_code)]

use lokal_gateway::{Gateway, Session};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::ResponseTemplate;

pub const BANK_ACCOUNTS: &str = "/admin/settings/bank-accounts";
pub const PAYMENT_GATEWAYS: &str = "/admin/settings/payment-gateways";
pub const IOT_DEVICES: &str = "/admin/settings/iot-devices";

/// An admin gateway pointed at `base_url`.
pub fn admin_gateway(base_url: &str) -> Gateway {
    let session = Session::in_memory();
    session.set_token(Some("admin-token".to_string()));
    Gateway::new(base_url, Arc::new(session))
}

pub fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub fn detail(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "detail": message }))
}

pub fn bank_account(id: &str, bank_name: &str) -> Value {
    json!({
        "id": id,
        "bank_name": bank_name,
        "account_name": "Lokal Platform (Pty) Ltd",
        "account_number": "62000000001",
        "branch_code": "250655",
        "account_type": "CURRENT",
        "is_primary": false
    })
}

pub fn payment_gateway(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "OZOW",
        "is_active": true,
        "merchant_id": null,
        "api_key": null,
        "environment": "SANDBOX"
    })
}

pub fn iot_device(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "device_type": "WIFI_CONTROLLER",
        "serial_number": "SN-0001",
        "ip_address": null,
        "status": "OFFLINE",
        "last_seen": null,
        "location": null
    })
}

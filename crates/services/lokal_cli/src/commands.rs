// File: services/lokal_cli/src/commands.rs
//! Subcommand handlers. Each module owns one clap subcommand enum and a
//! `run` function that calls the gateway and prints the result.

use lokal_console::{AlwaysConfirm, Confirm};
use lokal_gateway::Gateway;
use serde::de::DeserializeOwned;

use crate::output::Output;
use crate::prompt::TerminalConfirm;

pub mod admin;
pub mod agent;
pub mod auth;
pub mod electricity;
pub mod referrals;
pub mod settings;
pub mod wallet;
pub mod wifi;

/// What every handler needs.
pub struct App {
    pub gateway: Gateway,
    pub output: Output,
    assume_yes: bool,
}

impl App {
    pub fn new(gateway: Gateway, output: Output, assume_yes: bool) -> Self {
        Self {
            gateway,
            output,
            assume_yes,
        }
    }

    pub fn confirmer(&self) -> &'static dyn Confirm {
        if self.assume_yes {
            &AlwaysConfirm
        } else {
            &TerminalConfirm
        }
    }
}

/// Clap value parser for the backend's SCREAMING_CASE enums. Accepts any
/// case and `-` for `_`, so `--method snapscan` and `--tier GOLD` both work.
pub fn wire<E: DeserializeOwned>(raw: &str) -> Result<E, String> {
    let name = raw.trim().to_ascii_uppercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(name))
        .map_err(|_| format!("unknown value '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokal_gateway::models::{AgentTier, PaymentMethod, ProductType};

    #[test]
    fn test_wire_is_case_insensitive() {
        assert_eq!(wire::<PaymentMethod>("snapscan"), Ok(PaymentMethod::Snapscan));
        assert_eq!(wire::<AgentTier>(" Gold "), Ok(AgentTier::Gold));
        assert_eq!(wire::<ProductType>("wifi"), Ok(ProductType::Wifi));
    }

    #[test]
    fn test_wire_rejects_unknown() {
        assert_eq!(
            wire::<PaymentMethod>("bitcoin"),
            Err("unknown value 'bitcoin'".to_string())
        );
    }
}

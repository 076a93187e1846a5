// File: services/lokal_cli/src/prompt.rs
use dialoguer::{Confirm as ConfirmPrompt, Password};
use lokal_common::{validation_error, LokalError};
use lokal_console::Confirm;
use tracing::warn;

/// Asks on the terminal. Defaults to "no"; an unusable terminal declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }
}

/// Uses `given` when present, otherwise reads a hidden value from the
/// terminal.
pub fn secret(given: Option<String>, prompt: &str) -> Result<String, LokalError> {
    if let Some(value) = given {
        return Ok(value);
    }
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| validation_error(format!("{} not provided: {}", prompt, e)))
}

// --- File: crates/lokal_console/src/lib.rs ---

pub mod confirm; // Confirmation prompts
pub mod error; // Error handling
pub mod panel; // The CRUD view-model
pub mod resource; // Admin settings resources

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use error::ConsoleError;
pub use panel::{CrudPanel, EditSlot};
pub use resource::{AdminResource, BankAccounts, BoxFuture, IotDevices, PaymentGateways};

// View state for the admin settings pages: one panel per resource, holding
// the loaded records and the record being edited.

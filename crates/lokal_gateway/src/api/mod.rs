// --- File: crates/lokal_gateway/src/api/mod.rs ---
//! Typed methods on [`Gateway`](crate::Gateway), one module per backend
//! area. Each fixes the path, verb and payload shape, and unwraps list
//! envelopes such as `{"packages": [...]}`.

pub mod admin;
pub mod agent;
pub mod auth;
pub mod electricity;
pub mod referrals;
pub mod settings;
pub mod transactions;
pub mod users;
pub mod wallet;
pub mod wifi;

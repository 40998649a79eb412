//! Authentication service module
//!
//! Issuance and validation as exposed to the transport layer: role-scoped
//! token issuance and combined access/validity checks against the current
//! revocation list.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;

//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool construction
//! - Repository implementations for roles and revoked tokens

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::{MySqlRevocationRepository, MySqlRoleRepository};

//! Tests for domain entities

mod revocation_tests;
mod token_tests;

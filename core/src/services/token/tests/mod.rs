//! Tests for the token service

pub(crate) mod support;

//! Tests for the revocation repository

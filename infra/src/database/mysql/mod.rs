//! MySQL repository implementations

pub mod revocation_repository_impl;
pub mod role_repository_impl;

pub use revocation_repository_impl::MySqlRevocationRepository;
pub use role_repository_impl::MySqlRoleRepository;

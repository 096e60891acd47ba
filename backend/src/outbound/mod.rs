//! Outbound adapters implementing the driven domain ports.
//!
//! - **memory**: volatile store for development and tests
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **security**: bcrypt hashing and JWT issuance
//!
//! Adapters translate between domain types and infrastructure representations
//! and carry no business rules beyond the uniqueness guarantees the ports
//! require.

pub mod memory;
pub mod persistence;
pub mod security;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints (axum)
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `storage` - In-memory repositories for tests and local runs

pub mod http;
pub mod postgres;
pub mod storage;

pub use storage::InMemoryStore;

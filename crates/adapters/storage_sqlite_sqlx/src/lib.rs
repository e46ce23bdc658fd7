//! # personnel-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `EmployeeRepository` port defined in `personnel-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Load the optional sample employees
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `personnel-app` (for port traits) and `personnel-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod employee_repo;
mod error;
mod pool;
mod seed;

pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::{Config, Database};

//! Rollbook - student records manager with pluggable storage backends.
//!
//! The core is the [`store::StudentStore`] trait: a CRUD/query contract
//! over student records with shared validation and uniqueness rules.
//! Two backends implement it:
//!
//! - [`store::MemoryStore`] - an id-to-record map plus a monotonic id
//!   counter, for embedding and tests
//! - [`store::SqliteStore`] - Diesel over SQLite, for persistence
//!   across CLI invocations (requires the `sqlite` feature, default-on)
//!
//! # Modules
//!
//! - [`config`] - TOML configuration and tracing setup
//! - [`domain`] - backend-agnostic types: [`domain::Student`],
//!   [`domain::NewStudent`], [`domain::StudentId`], [`domain::StoreStats`]
//! - [`error`] - error types; mutating operations report `Validation`
//!   and `NotFound` as distinguishable kinds
//! - [`store`] - the store contract and its backends
//! - [`db`] - Diesel plumbing for the SQLite backend
//! - [`cli`] / [`app`] - the `rollbook` command-line front end
//!
//! # Example
//!
//! ```
//! use rollbook::domain::NewStudent;
//! use rollbook::store::{MemoryStore, StudentStore};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = MemoryStore::new();
//! let id = store
//!     .add(NewStudent::new("Aarav Sharma", "aarav@email.com", 20, "CS"))
//!     .await
//!     .unwrap();
//! assert_eq!(store.get_by_id(id).await.unwrap().name, "Aarav Sharma");
//! # });
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod db;

//! Core library surface for the Acronym Management Tool (`amt`).
//!
//! The modules exposed here keep the API intentionally small: the `bin`
//! target drives everything through the `db` operations and the `ui` prompt
//! flows, and the integration tests reuse the same pieces against throwaway
//! database files.

pub mod cli;
pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` to locate and open the store before dispatching an action.
pub use db::{locate_db, open_db, LocateError, StoreFile};

/// The two record shapes the rest of the code manipulates.
pub use models::{AcronymRecord, NewAcronym};

/// The interactive entry and confirmation flows.
pub use ui::Prompter;

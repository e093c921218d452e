//! Local SQLite persistence: one lazily opened connection behind an actor,
//! idempotent schema bootstrap, and generic CRUD helpers.
//!
//! Layout:
//! - `actor.rs`: the connection owner and its `StoreHandle`
//! - `bootstrap.rs`: create-if-missing plus seed row, per table
//! - `query.rs`: insert/update/select/delete/raw over `StoreHandle`
//! - `schema.rs`: table descriptors

pub mod actor;
pub mod query;
pub mod schema;

mod bootstrap;
mod row;

pub use actor::{ExecResult, StoreHandle, spawn};
pub use query::{ExecOutcome, InsertOutcome, SelectOutcome};
pub use row::Row;
pub use schema::{OPTION_TABLE, TABLES, TableDescriptor};
pub use vocalis_sqlgen::{Filter, SqlValue, Statement};

//! Database module: models, schema, and the actor serializing access.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows (plus wire conversions)
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store/`: query implementations, one module per resource
//! - `actor.rs`: the ractor actor owning the pool and the `DbHandle`

pub mod actor;
pub mod models;
pub mod schema;

mod store;

pub use actor::{DbHandle, DbMessage, spawn};
pub use models::{
    DbCalendar, DbCalendarEvent, DbFinanceEntry, DbFolder, DbMoodEntry, DbNote, DbProfile, DbTask,
    DbUserWidget, DbWidgetType,
};
pub use schema::SQLITE_INIT;

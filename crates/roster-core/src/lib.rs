//! Core library for the Roster employee record manager.
//!
//! This crate provides everything behind the interactive menu: the employee
//! model, the SQLite record store gateway, input validation, pagination, the
//! event sink and the session that ties them together. The binary crate only
//! supplies a terminal [`Console`], the logger and configuration sources.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_core::{Database, MemorySink, PageSize, ScriptedConsole, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let db = Database::connect(dir.path().join("roster.db"))?;
//!
//! // Create one employee, list the table, then exit.
//! let mut console = ScriptedConsole::new(["1", "Alice", "30", "Eng", "50000", "2", "6"]);
//! let mut sink = MemorySink::new();
//! Session::new(db, &mut console, &mut sink, PageSize::default()).run()?;
//!
//! assert!(console.transcript().contains("Name: Alice"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod db;
pub mod display;
pub mod error;
pub mod events;
pub mod models;
pub mod pagination;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, PageSize};
pub use console::{Console, ScriptedConsole};
pub use db::{Database, Statement, UpdateBuilder};
pub use error::{Result, RosterError};
pub use events::{Event, EventSink, LogSink, MemorySink};
pub use models::{Employee, EmployeeUpdate, NewEmployee};
pub use pagination::Paginator;
pub use session::{open_database, MenuChoice, Session};

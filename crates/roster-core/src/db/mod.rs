//! Record store gateway backed by SQLite.
//!
//! This module owns the single backend connection used for a session. It
//! executes parameterized [`Statement`]s, commits every mutating statement
//! explicitly and surfaces backend failures as typed errors: failures to open,
//! initialize or close the connection are [`RosterError::Connection`], and
//! statement or commit failures are [`RosterError::Query`].
//!
//! [`RosterError::Connection`]: crate::error::RosterError::Connection
//! [`RosterError::Query`]: crate::error::RosterError::Query

use std::{cell::Cell, path::Path};

use log::debug;
use rusqlite::{params_from_iter, Connection, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod employee_queries;
pub mod schema;
pub mod statement;
pub mod update_builder;

pub use statement::{Execution, Statement};
pub use update_builder::{Column, UpdateBuilder};

/// Database connection and statement execution handler.
#[derive(Debug)]
pub struct Database {
    connection: Connection,
    statements_issued: Cell<usize>,
}

impl Database {
    /// Opens the database file and makes sure the employees table exists.
    ///
    /// The parent directory of `path` must already exist.
    pub fn connect<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).connect_context("Failed to open database connection")?;

        let db = Self {
            connection,
            statements_issued: Cell::new(0),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs a read-only statement and maps every returned row.
    pub fn query<T, F>(&self, statement: &Statement, map_row: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.track(statement);

        let mut stmt = self
            .connection
            .prepare(statement.sql())
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params_from_iter(statement.params()), map_row)
            .db_context("Failed to execute query")?;

        rows.collect::<rusqlite::Result<Vec<T>>>()
            .db_context("Failed to read query results")
    }

    /// Runs a mutating statement inside a transaction and commits it.
    pub fn execute(&mut self, statement: &Statement) -> Result<Execution> {
        self.track(statement);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(statement.sql(), params_from_iter(statement.params()))
            .db_context("Failed to execute statement")?;
        let last_insert_id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Execution {
            rows_affected,
            last_insert_id,
        })
    }

    /// Number of statements sent to the backend through [`Self::query`] and
    /// [`Self::execute`] since the connection was opened.
    pub fn statements_issued(&self) -> usize {
        self.statements_issued.get()
    }

    /// Releases the connection.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| e)
            .connect_context("Failed to close database connection")
    }

    fn track(&self, statement: &Statement) {
        debug!("Executing statement: {}", statement.sql());
        self.statements_issued.set(self.statements_issued.get() + 1);
    }
}

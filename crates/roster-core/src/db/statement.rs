//! Parameterized statements and execution summaries.

use rusqlite::types::Value;

/// SQL text plus the ordered values bound to its `?` placeholders.
///
/// Values never appear in the SQL text itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    /// Creates a statement with no bound parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Binds the next positional parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// What the backend reported after a committed mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// Rows inserted, changed or removed by the statement
    pub rows_affected: usize,
    /// Row id of the most recent successful insert on this connection
    pub last_insert_id: i64,
}

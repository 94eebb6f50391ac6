//! Builder for partial `UPDATE` statements.
//!
//! The builder keeps an ordered list of `(column, value)` assignments and
//! renders them into a single parameterized statement. Column identifiers come
//! from the closed [`Column`] enum; values are only ever bound as parameters.
//!
//! ```rust
//! use roster_core::db::{Column, UpdateBuilder};
//!
//! let statement = UpdateBuilder::new()
//!     .set(Column::Age, 31_i64)
//!     .build(4)
//!     .expect("one assignment");
//! assert_eq!(statement.sql(), "UPDATE employees SET age = ? WHERE id = ?");
//!
//! assert!(UpdateBuilder::new().build(4).is_none());
//! ```

use rusqlite::types::Value;

use super::Statement;
use crate::models::EmployeeUpdate;

/// Columns of the employees table that can be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Age,
    Department,
    Salary,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Age => "age",
            Column::Department => "department",
            Column::Salary => "salary",
        }
    }
}

/// Ordered collection of column assignments for one `UPDATE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBuilder {
    assignments: Vec<(Column, Value)>,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn set(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    /// Appends an assignment only when a value is present.
    pub fn set_opt<V: Into<Value>>(self, column: Column, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    /// Renders the statement targeting `id`, or `None` when nothing is set.
    pub fn build(self, id: i64) -> Option<Statement> {
        if self.assignments.is_empty() {
            return None;
        }

        let set_clause = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column.as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        let statement = self.assignments.into_iter().fold(
            Statement::new(format!("UPDATE employees SET {set_clause} WHERE id = ?")),
            |statement, (_, value)| statement.bind(value),
        );

        Some(statement.bind(id))
    }
}

impl From<&EmployeeUpdate> for UpdateBuilder {
    fn from(update: &EmployeeUpdate) -> Self {
        UpdateBuilder::new()
            .set_opt(Column::Name, update.name.clone())
            .set_opt(Column::Age, update.age)
            .set_opt(Column::Department, update.department.clone())
            .set_opt(Column::Salary, update.salary)
    }
}

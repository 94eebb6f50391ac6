//! Employee CRUD statements.

use crate::{
    error::Result,
    models::{Employee, EmployeeUpdate, NewEmployee},
};

use super::{Execution, Statement, UpdateBuilder};

const INSERT_EMPLOYEE_SQL: &str =
    "INSERT INTO employees (name, age, department, salary) VALUES (?, ?, ?, ?)";
const SELECT_EMPLOYEES_SQL: &str =
    "SELECT id, name, age, department, salary FROM employees ORDER BY id";
const SEARCH_EMPLOYEES_SQL: &str = "SELECT id, name, age, department, salary FROM employees WHERE name LIKE ? OR department LIKE ? ORDER BY id";
const DELETE_EMPLOYEE_SQL: &str = "DELETE FROM employees WHERE id = ?";

impl super::Database {
    /// Helper function to construct an Employee from a database row
    fn build_employee_from_row(row: &rusqlite::Row) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            department: row.get(3)?,
            salary: row.get(4)?,
        })
    }

    /// Inserts a new employee and returns the backend-assigned id.
    pub fn insert_employee(&mut self, employee: &NewEmployee) -> Result<i64> {
        let statement = Statement::new(INSERT_EMPLOYEE_SQL)
            .bind(employee.name.clone())
            .bind(employee.age)
            .bind(employee.department.clone())
            .bind(employee.salary);

        Ok(self.execute(&statement)?.last_insert_id)
    }

    /// Fetches every employee, ordered by id.
    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        self.query(
            &Statement::new(SELECT_EMPLOYEES_SQL),
            Self::build_employee_from_row,
        )
    }

    /// Fetches employees whose name or department contains `term`.
    ///
    /// Matching uses SQLite `LIKE`, which ignores ASCII case.
    pub fn search_employees(&self, term: &str) -> Result<Vec<Employee>> {
        let pattern = format!("%{term}%");
        let statement = Statement::new(SEARCH_EMPLOYEES_SQL)
            .bind(pattern.clone())
            .bind(pattern);

        self.query(&statement, Self::build_employee_from_row)
    }

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` without touching the backend when `update` carries
    /// no fields.
    pub fn update_employee(&mut self, id: i64, update: &EmployeeUpdate) -> Result<Option<Execution>> {
        match UpdateBuilder::from(update).build(id) {
            Some(statement) => self.execute(&statement).map(Some),
            None => Ok(None),
        }
    }

    /// Deletes an employee by id. A missing id affects zero rows.
    pub fn delete_employee(&mut self, id: i64) -> Result<Execution> {
        self.execute(&Statement::new(DELETE_EMPLOYEE_SQL).bind(id))
    }
}

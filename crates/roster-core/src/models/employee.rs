//! Employee record definitions.

/// A stored employee row.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Backend-assigned identifier, never reused after deletion
    pub id: i64,

    /// Full name
    pub name: String,

    /// Age in years (always positive)
    pub age: i64,

    /// Department the employee belongs to
    pub department: String,

    /// Salary (always positive)
    pub salary: f64,
}

/// Field values for a record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i64,
    pub department: String,
    pub salary: f64,
}

/// A partial update: only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

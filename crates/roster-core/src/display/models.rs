//! Display implementations for domain models.

use std::fmt;

use crate::models::Employee;

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Department: {}, Salary: {}",
            self.id, self.name, self.age, self.department, self.salary
        )
    }
}

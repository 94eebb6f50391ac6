//! Collection wrapper types for displaying groups of employees.

use std::fmt;

use crate::models::Employee;

/// One page of a paginated read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmployeePage<'a> {
    /// 1-indexed page number
    pub number: usize,
    /// Total number of pages in the result set
    pub total: usize,
    pub records: &'a [Employee],
}

impl EmployeePage<'_> {
    /// Returns true when another page follows this one.
    pub fn has_next(&self) -> bool {
        self.number < self.total
    }
}

impl fmt::Display for EmployeePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "## Employees Page {}", self.number)?;
        writeln!(f)?;
        for employee in self.records {
            writeln!(f, "- {employee}")?;
        }
        Ok(())
    }
}

/// Unpaginated search matches.
pub struct SearchResults(pub Vec<Employee>);

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching records found.");
        }

        writeln!(f)?;
        writeln!(f, "## Search Results")?;
        writeln!(f)?;
        for employee in &self.0 {
            writeln!(f, "- {employee}")?;
        }
        Ok(())
    }
}

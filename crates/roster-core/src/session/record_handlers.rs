//! Create, update and delete operations.

use super::Session;
use crate::{
    console::Console,
    display::OperationStatus,
    error::Result,
    events::{Event, EventSink},
    models::{EmployeeUpdate, NewEmployee},
    validate::{validate, Optional, PositiveFloat, PositiveInteger, Text},
};

impl<C: Console, S: EventSink> Session<C, S> {
    /// Prompts for a new employee and inserts it.
    pub fn create_employee(&mut self) -> Result<()> {
        let name = validate(&mut self.console, "Enter employee name: ", Text)?;
        let age = validate(
            &mut self.console,
            "Enter employee age (positive integer): ",
            PositiveInteger,
        )?;
        let department = validate(&mut self.console, "Enter employee department: ", Text)?;
        let salary = validate(
            &mut self.console,
            "Enter employee salary (positive number): ",
            PositiveFloat,
        )?;

        let employee = NewEmployee {
            name,
            age,
            department,
            salary,
        };

        match self.db.insert_employee(&employee) {
            Ok(id) => {
                self.sink.record(&Event::Created {
                    id,
                    name: employee.name,
                });
                self.report(OperationStatus::success(format!(
                    "Employee added successfully! (ID: {id})"
                )))
            }
            Err(e) => {
                self.sink.record(&Event::CreateFailed { reason: e.chain() });
                self.report(OperationStatus::failure("Failed to add employee."))
            }
        }
    }

    /// Prompts for an id and the fields to change, then applies only those.
    ///
    /// When every field is left blank no statement reaches the backend.
    pub fn update_employee(&mut self) -> Result<()> {
        let id = validate(
            &mut self.console,
            "Enter the ID of the employee you want to update: ",
            PositiveInteger,
        )?;

        self.console
            .write("\nEnter the new details (leave blank to keep unchanged):\n")?;
        let update = EmployeeUpdate {
            name: validate(&mut self.console, "New name: ", Optional(Text))?,
            age: validate(&mut self.console, "New age: ", Optional(PositiveInteger))?,
            department: validate(&mut self.console, "New department: ", Optional(Text))?,
            salary: validate(&mut self.console, "New salary: ", Optional(PositiveFloat))?,
        };

        match self.db.update_employee(id, &update) {
            Ok(None) => self.console.write("No changes were made.\n"),
            Ok(Some(execution)) => {
                self.sink.record(&Event::Updated {
                    id,
                    rows_affected: execution.rows_affected,
                });
                self.report(OperationStatus::success("Employee updated successfully!"))
            }
            Err(e) => {
                self.sink.record(&Event::UpdateFailed {
                    id,
                    reason: e.chain(),
                });
                self.report(OperationStatus::failure("Failed to update employee."))
            }
        }
    }

    /// Prompts for an id and deletes that record.
    ///
    /// An id that matches nothing is still reported as deleted; the event log
    /// records it as a warning.
    pub fn delete_employee(&mut self) -> Result<()> {
        let id = validate(
            &mut self.console,
            "Enter the ID of the employee you want to delete: ",
            PositiveInteger,
        )?;

        match self.db.delete_employee(id) {
            Ok(execution) => {
                self.sink.record(&Event::Deleted {
                    id,
                    rows_affected: execution.rows_affected,
                });
                self.report(OperationStatus::success("Employee deleted successfully!"))
            }
            Err(e) => {
                self.sink.record(&Event::DeleteFailed {
                    id,
                    reason: e.chain(),
                });
                self.report(OperationStatus::failure("Failed to delete employee."))
            }
        }
    }
}

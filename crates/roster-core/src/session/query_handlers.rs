//! Read and search operations.

use super::Session;
use crate::{
    console::Console,
    display::{OperationStatus, SearchResults},
    error::Result,
    events::{Event, EventSink},
    pagination::Paginator,
    validate::{validate, Text},
};

impl<C: Console, S: EventSink> Session<C, S> {
    /// Fetches every record once and pages through it.
    pub fn read_employees(&mut self) -> Result<()> {
        match self.db.list_employees() {
            Ok(employees) => {
                Paginator::new(&employees, self.page_size).present(&mut self.console)?;
                Ok(())
            }
            Err(e) => {
                self.sink.record(&Event::ReadFailed { reason: e.chain() });
                self.report(OperationStatus::failure("Error retrieving employee data."))
            }
        }
    }

    /// Shows every record whose name or department contains the search term.
    pub fn search_employees(&mut self) -> Result<()> {
        let term = validate(
            &mut self.console,
            "Enter the employee's name or department to search: ",
            Text,
        )?;

        match self.db.search_employees(&term) {
            Ok(matches) => self.console.write(&SearchResults(matches).to_string()),
            Err(e) => {
                self.sink.record(&Event::SearchFailed { reason: e.chain() });
                self.report(OperationStatus::failure("Error searching employees."))
            }
        }
    }
}

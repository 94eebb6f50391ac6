//! Interactive session: the command loop and the operations it dispatches.
//!
//! A [`Session`] owns the single backend connection for the process, the
//! [`Console`] it talks through and the [`EventSink`] it reports to. Every
//! operation borrows the connection from the session; nothing is global.
//!
//! ```text
//! ┌────────────┐    ┌─────────────┐    ┌──────────────┐    ┌──────────┐
//! │ Menu loop  │───▶│  Validator  │───▶│  Operation   │───▶│ Database │
//! │ (run)      │    │ (validate)  │    │ (handlers)   │    │  (db)    │
//! └────────────┘    └─────────────┘    └──────────────┘    └──────────┘
//!                                        Read ─▶ Paginator
//! ```
//!
//! Backend failures inside an operation are logged through the sink and shown
//! as a short failure message; the loop then continues. End of input at any
//! prompt ends the session through the exit path.

use std::path::Path;

pub mod menu;
mod query_handlers;
mod record_handlers;

#[cfg(test)]
mod tests;

pub use menu::{MenuChoice, SessionState};

use crate::{
    config::PageSize,
    console::Console,
    db::Database,
    display::{Menu, OperationStatus},
    error::{RosterError, Result},
    events::{Event, EventSink},
};

const MENU_PROMPT: &str = "Enter your choice: ";

/// Opens the backend and records the outcome.
pub fn open_database<S: EventSink + ?Sized>(path: &Path, sink: &mut S) -> Result<Database> {
    match Database::connect(path) {
        Ok(db) => {
            sink.record(&Event::Connected {
                path: path.to_path_buf(),
            });
            Ok(db)
        }
        Err(e) => {
            sink.record(&Event::ConnectionFailed { reason: e.chain() });
            Err(e)
        }
    }
}

/// One interactive session over an open database.
pub struct Session<C, S> {
    db: Database,
    console: C,
    sink: S,
    page_size: PageSize,
}

impl<C: Console, S: EventSink> Session<C, S> {
    pub fn new(db: Database, console: C, sink: S, page_size: PageSize) -> Self {
        Self {
            db,
            console,
            sink,
            page_size,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Runs the command loop until the user exits or input ends.
    ///
    /// The connection is closed exactly once, on the way out.
    pub fn run(mut self) -> Result<()> {
        let mut state = SessionState::MenuShown;
        loop {
            state = match state {
                SessionState::MenuShown => match self.read_choice() {
                    Ok(Some(choice)) => SessionState::Dispatching(choice),
                    Ok(None) => {
                        self.report(OperationStatus::failure("Invalid choice! Please try again."))?;
                        SessionState::MenuShown
                    }
                    Err(RosterError::InputClosed) => SessionState::Exited,
                    Err(e) => return Err(e),
                },
                SessionState::Dispatching(MenuChoice::Exit) => SessionState::Exited,
                SessionState::Dispatching(choice) => match self.dispatch(choice) {
                    Ok(()) => SessionState::MenuShown,
                    Err(RosterError::InputClosed) => SessionState::Exited,
                    Err(e) => return Err(e),
                },
                SessionState::Exited => return self.exit(),
            };
        }
    }

    /// Runs the operation behind `choice`. Exit is handled by [`Self::run`].
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Create => self.create_employee(),
            MenuChoice::Read => self.read_employees(),
            MenuChoice::Update => self.update_employee(),
            MenuChoice::Delete => self.delete_employee(),
            MenuChoice::Search => self.search_employees(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Shows the menu and reads one choice; `None` for unrecognized input.
    fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        self.console.write(&Menu.to_string())?;
        let line = self.console.read_line(MENU_PROMPT)?;
        Ok(line.parse().ok())
    }

    fn report(&mut self, status: OperationStatus) -> Result<()> {
        self.console.write(&status.to_string())
    }

    fn exit(self) -> Result<()> {
        let Session {
            db,
            mut console,
            mut sink,
            ..
        } = self;

        let written = console.write("Exiting the system.\n");
        sink.record(&Event::Exited);

        if let Err(e) = db.close() {
            sink.record(&Event::CloseFailed { reason: e.chain() });
            return Err(e);
        }
        written
    }
}

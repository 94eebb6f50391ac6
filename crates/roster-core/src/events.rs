//! Structured session events and the sinks that record them.
//!
//! Operations never call the logging facade directly. They hand an [`Event`]
//! to the [`EventSink`] owned by the session. The binary uses [`LogSink`],
//! which forwards to the `log` facade installed at startup; tests use
//! [`MemorySink`].

use std::{fmt, path::PathBuf};

use log::Level;

/// Something worth recording in the event log.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connected { path: PathBuf },
    ConnectionFailed { reason: String },
    Created { id: i64, name: String },
    CreateFailed { reason: String },
    ReadFailed { reason: String },
    SearchFailed { reason: String },
    Updated { id: i64, rows_affected: usize },
    UpdateFailed { id: i64, reason: String },
    Deleted { id: i64, rows_affected: usize },
    DeleteFailed { id: i64, reason: String },
    Exited,
    CloseFailed { reason: String },
}

impl Event {
    /// Severity of the event.
    ///
    /// Updates and deletes that matched no row are warnings.
    pub fn level(&self) -> Level {
        match self {
            Event::Connected { .. } | Event::Created { .. } | Event::Exited => Level::Info,
            Event::Updated { rows_affected, .. } | Event::Deleted { rows_affected, .. } => {
                if *rows_affected == 0 {
                    Level::Warn
                } else {
                    Level::Info
                }
            }
            Event::ConnectionFailed { .. }
            | Event::CreateFailed { .. }
            | Event::ReadFailed { .. }
            | Event::SearchFailed { .. }
            | Event::UpdateFailed { .. }
            | Event::DeleteFailed { .. }
            | Event::CloseFailed { .. } => Level::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Connected { path } => {
                write!(f, "Connected to the database at {}", path.display())
            }
            Event::ConnectionFailed { reason } => {
                write!(f, "Failed to connect to the database: {reason}")
            }
            Event::Created { id, name } => {
                write!(f, "Employee '{name}' added successfully with ID {id}")
            }
            Event::CreateFailed { reason } => write!(f, "Failed to insert employee: {reason}"),
            Event::ReadFailed { reason } => write!(f, "Failed to retrieve data: {reason}"),
            Event::SearchFailed { reason } => write!(f, "Failed to search employees: {reason}"),
            Event::Updated { id, rows_affected: 0 } => {
                write!(f, "Employee ID {id} update matched no record")
            }
            Event::Updated { id, .. } => write!(f, "Employee ID {id} updated successfully"),
            Event::UpdateFailed { id, reason } => {
                write!(f, "Failed to update employee ID {id}: {reason}")
            }
            Event::Deleted { id, rows_affected: 0 } => {
                write!(f, "Employee ID {id} delete matched no record")
            }
            Event::Deleted { id, .. } => write!(f, "Employee ID {id} deleted successfully"),
            Event::DeleteFailed { id, reason } => {
                write!(f, "Failed to delete employee ID {id}: {reason}")
            }
            Event::Exited => write!(f, "Exiting the Employee Management System."),
            Event::CloseFailed { reason } => {
                write!(f, "Failed to close the database connection: {reason}")
            }
        }
    }
}

/// Destination for session events.
pub trait EventSink {
    fn record(&mut self, event: &Event);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: &Event) {
        log::log!(target: "roster::events", event.level(), "{event}");
    }
}

/// Keeps events in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<Event>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &Event) {
        (**self).record(event);
    }
}

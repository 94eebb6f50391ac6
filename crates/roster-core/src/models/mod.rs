//! Data models for employee records.
//!
//! Display implementations for these models are located in
//! [`crate::display`] to keep data structures and presentation apart.

pub mod employee;

pub use employee::{Employee, EmployeeUpdate, NewEmployee};

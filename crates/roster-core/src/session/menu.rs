//! Menu choices and command loop states.

use std::str::FromStr;

use crate::error::{RosterError, Result};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Read,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Create,
        MenuChoice::Read,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    /// The key the user types to pick this choice.
    pub fn key(&self) -> char {
        match self {
            MenuChoice::Create => '1',
            MenuChoice::Read => '2',
            MenuChoice::Update => '3',
            MenuChoice::Delete => '4',
            MenuChoice::Search => '5',
            MenuChoice::Exit => '6',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Create => "Create Employee",
            MenuChoice::Read => "Read Employees",
            MenuChoice::Update => "Update Employee",
            MenuChoice::Delete => "Delete Employee",
            MenuChoice::Search => "Search Employee",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    /// Parses a menu key. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| {
                let mut chars = key.chars();
                chars.next() == Some(choice.key()) && chars.next().is_none()
            })
            .ok_or_else(|| {
                RosterError::invalid_input("choice").with_reason(format!("unknown menu key '{key}'"))
            })
    }
}

/// States of the command loop. `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuShown,
    Dispatching(MenuChoice),
    Exited,
}

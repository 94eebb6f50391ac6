//! Command loop menu.

use std::fmt;

use crate::session::MenuChoice;

/// The six-item main menu.
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "# Employee Management System")?;
        writeln!(f)?;
        for choice in MenuChoice::ALL {
            writeln!(f, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }
}

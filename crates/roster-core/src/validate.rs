//! Input validation with re-prompting.
//!
//! Numeric prompts loop until the user enters a well-formed positive value;
//! there is no retry limit. Text prompts return the line as entered.

use crate::{
    console::Console,
    error::{RosterError, Result},
};

/// Message shown whenever a typed value is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please try again.\n";

/// A kind of value a prompt can ask for.
pub trait InputKind {
    type Value;

    /// Converts one raw line into a value of this kind.
    fn parse(&self, raw: &str) -> Result<Self::Value>;
}

/// A strictly positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveInteger;

/// A strictly positive, finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveFloat;

/// Free text, returned exactly as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text;

/// Wraps another kind so that an empty line yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<K>(pub K);

impl InputKind for PositiveInteger {
    type Value = i64;

    fn parse(&self, raw: &str) -> Result<i64> {
        parse_positive_integer(raw)
    }
}

impl InputKind for PositiveFloat {
    type Value = f64;

    fn parse(&self, raw: &str) -> Result<f64> {
        parse_positive_float(raw)
    }
}

impl InputKind for Text {
    type Value = String;

    fn parse(&self, raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }
}

impl<K: InputKind> InputKind for Optional<K> {
    type Value = Option<K::Value>;

    fn parse(&self, raw: &str) -> Result<Option<K::Value>> {
        if raw.is_empty() {
            Ok(None)
        } else {
            self.0.parse(raw).map(Some)
        }
    }
}

/// Parses a strictly positive integer, ignoring surrounding whitespace.
pub fn parse_positive_integer(raw: &str) -> Result<i64> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        RosterError::invalid_input("integer").with_reason(format!("'{raw}' is not an integer"))
    })?;
    if value <= 0 {
        return Err(RosterError::invalid_input("integer").with_reason("must be greater than zero"));
    }
    Ok(value)
}

/// Parses a strictly positive, finite number, ignoring surrounding whitespace.
pub fn parse_positive_float(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        RosterError::invalid_input("number").with_reason(format!("'{raw}' is not a number"))
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(RosterError::invalid_input("number")
            .with_reason("must be a finite value greater than zero"));
    }
    Ok(value)
}

/// Prompts until `kind` accepts the input.
///
/// Rejected input prints [`INVALID_INPUT_MESSAGE`] and asks again. Any other
/// error, such as closed input, ends the loop.
pub fn validate<C, K>(console: &mut C, prompt: &str, kind: K) -> Result<K::Value>
where
    C: Console + ?Sized,
    K: InputKind,
{
    loop {
        let line = console.read_line(prompt)?;
        match kind.parse(&line) {
            Ok(value) => return Ok(value),
            Err(RosterError::InvalidInput { .. }) => console.write(INVALID_INPUT_MESSAGE)?,
            Err(e) => return Err(e),
        }
    }
}

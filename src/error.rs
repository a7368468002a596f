//! Error types.

use std::error;
use std::fmt;

/// A short-lived error.
///
/// The lifetime of the error is the same as the `cssparser::ParserInput` that
/// was used to create a `cssparser::Parser`.  That is, it is the lifetime of
/// the string data that is being parsed.
pub type ParseError<'i> = cssparser::ParseError<'i, ValueErrorKind>;

/// The reason why a value could not be parsed
#[derive(Debug, Clone, PartialEq)]
pub enum ValueErrorKind {
    /// There was nothing to parse
    Empty,

    /// The value could not be parsed
    Parse(String),

    // The value could be parsed, but is invalid
    Value(String),
}

impl ValueErrorKind {
    pub fn parse_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Parse(s.to_string())
    }

    pub fn value_error(s: &str) -> ValueErrorKind {
        ValueErrorKind::Value(s.to_string())
    }
}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueErrorKind::Empty => write!(f, "empty value"),

            ValueErrorKind::Parse(ref s) => write!(f, "parse error: {s}"),

            ValueErrorKind::Value(ref s) => write!(f, "invalid value: {s}"),
        }
    }
}

/// A density specification that could not be parsed, along with the offending input.
///
/// This is the only error that [`Density::parse`](crate::Density::parse) returns.  No
/// partial value is produced when parsing fails.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFormat {
    pub input: String,
    pub err: ValueErrorKind,
}

impl error::Error for InvalidFormat {}

impl fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid density specification {:?}: {}", self.input, self.err)
    }
}

/// Helper for converting `Result<O, E>` into `Result<O, InvalidFormat>`
///
/// The individual steps of a density parser report a bare `ValueErrorKind`, since they
/// only see a piece of the input.  The caller that owns the whole input string uses
/// `.input(text)` to attach it:
///
/// ```
/// # use wandkit::{InputResultExt, InvalidFormat, ValueErrorKind};
/// fn parse_foo(value: &str) -> Result<(), ValueErrorKind>
/// # { Err(ValueErrorKind::value_error("test")) }
///
/// let result = parse_foo("foo").input("foo 42");
/// assert!(result.is_err());
/// # Ok::<(), InvalidFormat>(())
/// ```
pub trait InputResultExt<O> {
    fn input(self, input: &str) -> Result<O, InvalidFormat>;
}

impl<O, E: Into<ValueErrorKind>> InputResultExt<O> for Result<O, E> {
    fn input(self, input: &str) -> Result<O, InvalidFormat> {
        self.map_err(|e| e.into()).map_err(|err| InvalidFormat {
            input: input.to_string(),
            err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_mentions_the_input() {
        let e = InvalidFormat {
            input: String::from("300 dpi"),
            err: ValueErrorKind::value_error("unknown unit"),
        };

        assert_eq!(
            format!("{e}"),
            "invalid density specification \"300 dpi\": invalid value: unknown unit"
        );
    }

    #[test]
    fn lifts_value_errors() {
        let r: Result<(), ValueErrorKind> = Err(ValueErrorKind::Empty);
        assert_eq!(
            r.input(""),
            Err(InvalidFormat {
                input: String::new(),
                err: ValueErrorKind::Empty,
            })
        );
    }
}

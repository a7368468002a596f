//! The `Parse` trait for CSS-like values, and utilities for parsers.

use cssparser::{Parser, ParserInput};

use crate::error::*;

/// Trait to parse values using `cssparser::Parser`.
pub trait Parse: Sized {
    /// Parses a value out of the `parser`.
    ///
    /// All value types should implement this for composability.
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Self, ParseError<'i>>;

    /// Convenience function to parse a value out of a `&str`.
    ///
    /// The whole string must be consumed; trailing garbage is an error.
    fn parse_str(s: &str) -> Result<Self, ParseError<'_>> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let res = Self::parse(&mut parser)?;
        parser.expect_exhausted()?;

        Ok(res)
    }
}

/// Parses an `f32` and ensures that it is not an infinity or NaN.
pub fn finite_f32(n: f32) -> Result<f32, ValueErrorKind> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ValueErrorKind::Value("expected finite number".to_string()))
    }
}

/// Parses a decimal number with locale-independent rules.
///
/// Accepted syntax:
///
/// ```text
/// number ::= ws* sign? digits ("." digit*)? (ws* sign)? ws*
///          | ws* sign? "." digit+ (ws* sign)? ws*
/// digits ::= digit (digit | ",")*
/// ws     ::= " " | "\t" | "\n" | "\x0B" | "\x0C" | "\r"
/// ```
///
/// Only one sign is allowed, either before or after the digits.  Commas are group
/// separators and are ignored; the decimal point is always `.`.  Exponents, `inf` and
/// `nan` are rejected, so the result is always finite.
pub fn invariant_number(s: &str) -> Result<f64, ValueErrorKind> {
    let s = s.trim_matches(is_number_whitespace);

    let (leading_negative, s) = match s.chars().next() {
        Some('-') => (Some(true), &s[1..]),
        Some('+') => (Some(false), &s[1..]),
        _ => (None, s),
    };

    let (trailing_negative, s) = match s.chars().last() {
        Some('-') => (Some(true), &s[..s.len() - 1]),
        Some('+') => (Some(false), &s[..s.len() - 1]),
        _ => (None, s),
    };
    let s = s.trim_end_matches(is_number_whitespace);

    let negative = match (leading_negative, trailing_negative) {
        (Some(_), Some(_)) => return Err(ValueErrorKind::parse_error("more than one sign")),
        (Some(n), None) | (None, Some(n)) => n,
        (None, None) => false,
    };

    let (integer, fraction) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    if integer.starts_with(',') || !integer.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return Err(ValueErrorKind::parse_error("expected number"));
    }

    let fraction = fraction.unwrap_or("");
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValueErrorKind::parse_error("expected number"));
    }

    let mut digits: String = integer.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() && fraction.is_empty() {
        return Err(ValueErrorKind::parse_error("expected number"));
    }

    if digits.is_empty() {
        digits.push('0');
    }

    if !fraction.is_empty() {
        digits.push('.');
        digits.push_str(fraction);
    }

    let n = digits
        .parse::<f64>()
        .map_err(|_| ValueErrorKind::parse_error("expected number"))?;

    if !n.is_finite() {
        return Err(ValueErrorKind::value_error("expected finite number"));
    }

    Ok(if negative { -n } else { n })
}

// Unlike char::is_ascii_whitespace, this includes vertical tab.
fn is_number_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t'..='\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_invariant_numbers() {
        assert_eq!(invariant_number("300"), Ok(300.0));
        assert_eq!(invariant_number("72.5"), Ok(72.5));
        assert_eq!(invariant_number(".5"), Ok(0.5));
        assert_eq!(invariant_number("5."), Ok(5.0));
        assert_eq!(invariant_number("+96"), Ok(96.0));
        assert_eq!(invariant_number("-1.25"), Ok(-1.25));
        assert_eq!(invariant_number("4-"), Ok(-4.0));
        assert_eq!(invariant_number("1,200"), Ok(1200.0));
        assert_eq!(invariant_number("\t150\t"), Ok(150.0));
        assert_eq!(invariant_number("\u{b}300"), Ok(300.0));
        assert_eq!(invariant_number("5\t-"), Ok(-5.0));
        assert_eq!(invariant_number("\r\n12.5+\u{c}"), Ok(12.5));
    }

    #[test]
    fn invalid_invariant_numbers() {
        assert!(invariant_number("").is_err());
        assert!(invariant_number(".").is_err());
        assert!(invariant_number("-").is_err());
        assert!(invariant_number("-5-").is_err());
        assert!(invariant_number(",5").is_err());
        assert!(invariant_number("1.2.3").is_err());
        assert!(invariant_number("1.2,5").is_err());
        assert!(invariant_number("1e5").is_err());
        assert!(invariant_number("inf").is_err());
        assert!(invariant_number("NaN").is_err());
        assert!(invariant_number("72dpi").is_err());
        assert!(invariant_number("1 200").is_err());
        assert!(invariant_number("-\t5").is_err());
        assert!(invariant_number("\u{a0}5").is_err());
    }

    #[test]
    fn rejects_huge_numbers() {
        let s = "9".repeat(400);
        assert!(invariant_number(&s).is_err());
    }
}

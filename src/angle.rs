//! Angles for skew operations, as given on the command line.

use std::f64::consts::TAU;

use cssparser::{_cssparser_internal_to_lowercase, match_ignore_ascii_case, Parser, Token};
use float_cmp::approx_eq;

use crate::error::*;
use crate::parsers::{finite_f32, Parse};

/// An angle kept in radians, within one turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Angle(f64);

impl Angle {
    pub fn from_radians(rad: f64) -> Angle {
        Angle(wrap_to_turn(rad))
    }

    pub fn from_degrees(deg: f64) -> Angle {
        Angle::from_radians(deg.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

// Values within rounding distance of a full turn snap to zero, so that
// "360" and "0" produce the same skew.
fn wrap_to_turn(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(TAU);

    if approx_eq!(f64, wrapped, 0.0) || approx_eq!(f64, wrapped, TAU) {
        0.0
    } else {
        wrapped
    }
}

/// How many degrees one of `unit` is, or `None` for an unknown unit.
fn degrees_per(unit: &str) -> Option<f64> {
    match_ignore_ascii_case! { unit,
        "deg" => Some(1.0),
        "grad" => Some(0.9),
        "rad" => Some(180.0 / std::f64::consts::PI),
        "turn" => Some(360.0),
        _ => None,
    }
}

// angle ::= number ("deg" | "grad" | "rad" | "turn")?
//
// A bare number is in degrees.
impl Parse for Angle {
    fn parse<'i>(parser: &mut Parser<'i, '_>) -> Result<Angle, ParseError<'i>> {
        let loc = parser.current_source_location();
        let token = parser.next()?.clone();

        let (value, per_unit) = match token {
            Token::Number { value, .. } => (value, Some(1.0)),
            Token::Dimension {
                value, ref unit, ..
            } => (value, degrees_per(unit)),
            _ => (0.0, None),
        };

        let per_unit = per_unit.ok_or_else(|| loc.new_unexpected_token_error(token.clone()))?;
        let value = finite_f32(value).map_err(|e| loc.new_custom_error(e))?;

        Ok(Angle::from_degrees(f64::from(value) * per_unit))
    }
}

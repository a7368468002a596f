//! Image density, i.e. the resolution of an image along each axis.
//!
//! A density is written as `<x>[x<y>][ <unit>]`, for example `300`, `300x200`, or
//! `72x72 inch`.  The unit is either `cm` or `inch`, in any letter case.  This textual
//! form is what gets stored in image metadata and passed on command lines, so
//! [`Density::parse`] and the `Display` implementation must stay in sync.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use cssparser::{_cssparser_internal_to_lowercase, match_ignore_ascii_case};

use crate::error::*;
use crate::parsers::invariant_number;

const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Units in which a [`Density`] is measured.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DensityUnit {
    /// No unit was specified.
    #[default]
    Undefined,

    /// Pixels per inch.
    PixelsPerInch,

    /// Pixels per centimeter.
    PixelsPerCentimeter,
}

impl DensityUnit {
    fn keyword(self) -> &'static str {
        match self {
            DensityUnit::Undefined => "",
            DensityUnit::PixelsPerInch => "inch",
            DensityUnit::PixelsPerCentimeter => "cm",
        }
    }
}

impl FromStr for DensityUnit {
    type Err = ValueErrorKind;

    fn from_str(s: &str) -> Result<DensityUnit, ValueErrorKind> {
        match_ignore_ascii_case! { s,
            "cm" => Ok(DensityUnit::PixelsPerCentimeter),
            "inch" => Ok(DensityUnit::PixelsPerInch),
            _ => Err(ValueErrorKind::value_error("expected cm or inch")),
        }
    }
}

impl fmt::Display for DensityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The horizontal and vertical resolution of an image.
///
/// A `Density` never changes after it is created; operations like
/// [`change_units`](Density::change_units) return a new value.
///
/// Two densities are equal when their `x`, `y`, and units are exactly equal.  There is
/// no tolerance for floating-point error.  A density that holds a NaN is not equal to
/// anything, not even itself; [`Density::parse`] never produces one.
///
/// Note that the numeric constructors default to [`DensityUnit::PixelsPerInch`], while
/// parsing a specification without a unit yields [`DensityUnit::Undefined`].
#[derive(Debug, Copy, Clone)]
pub struct Density {
    x: f64,
    y: f64,
    units: DensityUnit,
}

impl Density {
    /// Creates a density with the same resolution on both axes, in pixels per inch.
    pub fn uniform(xy: f64) -> Density {
        Density::new(xy, xy)
    }

    /// Creates a density with the same resolution on both axes.
    pub fn uniform_with_units(xy: f64, units: DensityUnit) -> Density {
        Density::with_units(xy, xy, units)
    }

    /// Creates a density in pixels per inch.
    pub fn new(x: f64, y: f64) -> Density {
        Density::with_units(x, y, DensityUnit::PixelsPerInch)
    }

    pub fn with_units(x: f64, y: f64, units: DensityUnit) -> Density {
        Density { x, y, units }
    }

    /// Parses a density specification of the form `<x>[x<y>][ <unit>]`.
    ///
    /// When only `<x>` is present it is used for both axes.  When no unit is present,
    /// the result has [`DensityUnit::Undefined`].
    ///
    /// ```
    /// # use wandkit::{Density, DensityUnit};
    /// let d = Density::parse("300x200 cm").unwrap();
    /// assert_eq!(d, Density::with_units(300.0, 200.0, DensityUnit::PixelsPerCentimeter));
    ///
    /// assert!(Density::parse("300 dpi").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Density, InvalidFormat> {
        parse_density(text).input(text)
    }

    /// The horizontal resolution.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The vertical resolution.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn units(&self) -> DensityUnit {
        self.units
    }

    /// Returns the same density expressed in other units.
    ///
    /// Conversion only happens between inches and centimeters; if either the current or
    /// the requested units are [`DensityUnit::Undefined`], the density is returned as is.
    #[must_use]
    pub fn change_units(&self, units: DensityUnit) -> Density {
        use DensityUnit::*;

        match (self.units, units) {
            (PixelsPerInch, PixelsPerCentimeter) => Density::with_units(
                self.x / CENTIMETERS_PER_INCH,
                self.y / CENTIMETERS_PER_INCH,
                units,
            ),

            (PixelsPerCentimeter, PixelsPerInch) => Density::with_units(
                self.x * CENTIMETERS_PER_INCH,
                self.y * CENTIMETERS_PER_INCH,
                units,
            ),

            _ => *self,
        }
    }

    /// Formats the density after converting it with [`change_units`](Density::change_units).
    pub fn to_string_with_units(&self, units: DensityUnit) -> String {
        self.change_units(units).to_string()
    }

    /// Computes the size in pixels of an area of `width` by `height`.
    ///
    /// The dimensions are taken to be in this density's own units, so a 2×3 inch area at
    /// 300 pixels per inch is 600×900 pixels.
    pub fn pixel_size(&self, width: f64, height: f64) -> (f64, f64) {
        (width * self.x, height * self.y)
    }
}

fn parse_density(text: &str) -> Result<Density, ValueErrorKind> {
    if text.is_empty() {
        return Err(ValueErrorKind::Empty);
    }

    let segments: Vec<&str> = text.split(' ').collect();
    if segments.len() > 2 {
        return Err(ValueErrorKind::parse_error("too many space-separated parts"));
    }

    let units = match segments.get(1) {
        Some(unit) => unit.parse::<DensityUnit>()?,
        None => DensityUnit::Undefined,
    };

    let components: Vec<&str> = segments[0].split('x').collect();
    if components.len() > 2 {
        return Err(ValueErrorKind::parse_error("too many x-separated numbers"));
    }

    let x = invariant_number(components[0])?;
    let y = match components.get(1) {
        Some(y) => invariant_number(y)?,
        None => x,
    };

    Ok(Density::with_units(x, y, units))
}

impl FromStr for Density {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Density, InvalidFormat> {
        Density::parse(s)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)?;

        match self.units {
            DensityUnit::Undefined => Ok(()),
            units => write!(f, " {units}"),
        }
    }
}

impl PartialEq for Density {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Density) -> bool {
        self.x == other.x && self.y == other.y && self.units == other.units
    }
}

impl Eq for Density {}

impl Hash for Density {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        self.units.hash(state);
    }
}

// 0.0 == -0.0, so they must hash the same.
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

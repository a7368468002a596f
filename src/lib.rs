//! Value types and drawing commands for a native image-processing wand.
//!
//! This crate contains the small pieces that sit between a program and an image engine:
//!
//! * [`Density`], the resolution of an image, which can be parsed from and written to
//!   its textual form like `"300x300 inch"`.
//!
//! * Drawables like [`DrawableSkewX`], deferred drawing operations that are applied to
//!   anything that implements [`DrawingContext`].
//!
//! # Example
//!
//! ```
//! use wandkit::{Density, DensityUnit, Drawable, DrawableSkewX, Session, TransformContext};
//!
//! let density: Density = "300x200 cm".parse().unwrap();
//! assert_eq!(density.units(), DensityUnit::PixelsPerCentimeter);
//! assert_eq!(density.to_string(), "300x200 cm");
//!
//! let mut ctx = TransformContext::new(Session::new());
//! DrawableSkewX::new(30.0).draw(Some(&mut ctx));
//! assert!(ctx.transform().xy > 0.5);
//! ```
//!
//! # Logging
//!
//! Set the `WANDKIT_LOG` environment variable to get a trace of the drawing operations on
//! stdout.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(nonstandard_style, rust_2018_idioms, unused)]
// Some lints no longer exist
#![warn(renamed_and_removed_lints)]
// Standalone lints
#![warn(trivial_casts, trivial_numeric_casts)]

pub use crate::angle::Angle;
pub use crate::density::{Density, DensityUnit};
pub use crate::drawables::{Drawable, DrawableSkewX};
pub use crate::drawing_ctx::{DrawingContext, TransformContext};
pub use crate::error::{InputResultExt, InvalidFormat, ParseError, ValueErrorKind};
pub use crate::parsers::Parse;
pub use crate::session::Session;
pub use crate::transform::Transform;

mod angle;
mod density;
mod drawables;
mod drawing_ctx;
mod error;
mod parsers;
mod session;
mod transform;

#[doc(hidden)]
pub mod log;

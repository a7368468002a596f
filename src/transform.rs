//! The current transformation matrix of a drawing context.

use std::fmt;

use crate::angle::Angle;

/// An affine matrix in the `[xx yx xy yy x0 y0]` order of SVG's `matrix()`.
///
/// A point maps to `(x * xx + y * xy + x0, x * yx + y * yy + y0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Transform {
    #[inline]
    pub fn new_unchecked(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Transform {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A horizontal shear: x grows by `tan(angle)` for every unit of y.
    #[inline]
    pub fn skew_x(angle: Angle) -> Self {
        Transform::new_unchecked(1.0, 0.0, angle.radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Composes `first` with this transform, so that `first` applies to points before `self`.
    #[must_use]
    pub fn pre_transform(&self, first: &Transform) -> Self {
        let (a, b) = (first, self);

        Transform {
            xx: a.xx * b.xx + a.yx * b.xy,
            yx: a.xx * b.yx + a.yx * b.yy,
            xy: a.xy * b.xx + a.yy * b.xy,
            yy: a.xy * b.yx + a.yy * b.yy,
            x0: a.x0 * b.xx + a.y0 * b.xy + b.x0,
            y0: a.x0 * b.yx + a.y0 * b.yy + b.y0,
        }
    }

    #[must_use]
    pub fn pre_skew_x(&self, angle: Angle) -> Self {
        self.pre_transform(&Transform::skew_x(angle))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({} {} {} {} {} {})",
            self.xx, self.yx, self.xy, self.yy, self.x0, self.y0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn assert_close(actual: &Transform, expected: &Transform) {
        let pairs = [
            (actual.xx, expected.xx),
            (actual.yx, expected.yx),
            (actual.xy, expected.xy),
            (actual.yy, expected.yy),
            (actual.x0, expected.x0),
            (actual.y0, expected.y0),
        ];

        for (a, e) in pairs {
            assert!(
                approx_eq!(f64, a, e, epsilon = 1e-12),
                "{} is not close to {}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform::new_unchecked(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_close(&t.pre_transform(&Transform::identity()), &t);
        assert_close(&Transform::identity().pre_transform(&t), &t);
    }

    #[test]
    fn pre_transform_applies_argument_first() {
        let scale = Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 0.0, 0.0);
        let shift = Transform::new_unchecked(1.0, 0.0, 0.0, 1.0, 10.0, 10.0);

        // shift, then scale
        assert_close(
            &scale.pre_transform(&shift),
            &Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 5.0, 5.0),
        );
        // scale, then shift
        assert_close(
            &shift.pre_transform(&scale),
            &Transform::new_unchecked(0.5, 0.0, 0.0, 0.5, 10.0, 10.0),
        );
    }

    #[test]
    fn skew_x_shears_horizontally() {
        let t = Transform::identity().pre_skew_x(Angle::from_degrees(45.0));
        assert_close(&t, &Transform::new_unchecked(1.0, 0.0, 1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn skews_accumulate() {
        let t = Transform::identity()
            .pre_skew_x(Angle::from_degrees(45.0))
            .pre_skew_x(Angle::from_degrees(45.0));
        assert_close(&t, &Transform::new_unchecked(1.0, 0.0, 2.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn formats_as_matrix() {
        assert_eq!(
            Transform::new_unchecked(1.0, 0.0, 0.5, 1.0, 0.0, 0.0).to_string(),
            "matrix(1 0 0.5 1 0 0)"
        );
    }
}

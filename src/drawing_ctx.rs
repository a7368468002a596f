//! The drawing context that drawables are applied to.
//!
//! The actual image engine lives outside this crate; [`DrawingContext`] is the narrow
//! capability that drawables use to talk to it.  [`TransformContext`] is an
//! implementation that only keeps track of the current transformation matrix, which is
//! enough to compute where things would end up.

use crate::angle::Angle;
use crate::session::Session;
use crate::transform::Transform;
use crate::wandkit_log;

/// Operations that a drawing engine exposes to drawables.
pub trait DrawingContext {
    /// Skews the current coordinate system in the horizontal direction.
    ///
    /// The angle is in degrees and is passed through as is; its range is up to the
    /// implementation.
    fn skew_x(&mut self, angle_degrees: f64);
}

/// A drawing context that accumulates the current transformation matrix.
pub struct TransformContext {
    session: Session,
    transform: Transform,
}

impl TransformContext {
    /// Creates a context whose transform starts out as the identity.
    pub fn new(session: Session) -> TransformContext {
        TransformContext {
            session,
            transform: Transform::identity(),
        }
    }

    /// The current transformation matrix.
    pub fn transform(&self) -> Transform {
        self.transform
    }
}

impl DrawingContext for TransformContext {
    fn skew_x(&mut self, angle_degrees: f64) {
        self.transform = self.transform.pre_skew_x(Angle::from_degrees(angle_degrees));

        wandkit_log!(
            self.session,
            "skew_x({}) -> {}",
            angle_degrees,
            self.transform
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn starts_at_identity() {
        let ctx = TransformContext::new(Session::new_for_test_suite());
        assert_eq!(ctx.transform(), Transform::identity());
    }

    #[test]
    fn skew_x_updates_transform() {
        let mut ctx = TransformContext::new(Session::new_for_test_suite());
        ctx.skew_x(45.0);

        let t = ctx.transform();
        assert!(approx_eq!(f64, t.xy, 1.0, epsilon = 1e-9));
        assert_eq!((t.xx, t.yx, t.yy, t.x0, t.y0), (1.0, 0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn full_turn_is_no_skew() {
        let mut ctx = TransformContext::new(Session::new_for_test_suite());
        ctx.skew_x(360.0);

        assert!(approx_eq!(f64, ctx.transform().xy, 0.0, epsilon = 1e-9));
    }
}

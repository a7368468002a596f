//! Drawing commands.
//!
//! A drawable is a deferred drawing operation.  It holds its parameters and applies them
//! to a [`DrawingContext`] when asked to draw.

use crate::drawing_ctx::DrawingContext;

/// A deferred drawing operation.
pub trait Drawable {
    /// Applies the operation to `ctx`.
    ///
    /// Drawing into no context at all does nothing.
    fn draw(&self, ctx: Option<&mut dyn DrawingContext>);
}

/// Skews the current coordinate system in the horizontal direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawableSkewX {
    angle: f64,
}

impl DrawableSkewX {
    pub fn new(angle: f64) -> DrawableSkewX {
        DrawableSkewX { angle }
    }

    /// The skew angle in degrees, exactly as it was given to [`new`](DrawableSkewX::new).
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Drawable for DrawableSkewX {
    fn draw(&self, ctx: Option<&mut dyn DrawingContext>) {
        if let Some(ctx) = ctx {
            ctx.skew_x(self.angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        skews: Vec<f64>,
    }

    impl DrawingContext for Recorder {
        fn skew_x(&mut self, angle_degrees: f64) {
            self.skews.push(angle_degrees);
        }
    }

    #[test]
    fn draws_nothing_without_context() {
        DrawableSkewX::new(45.0).draw(None);
    }

    #[test]
    fn forwards_angle_verbatim() {
        let mut recorder = Recorder::default();

        DrawableSkewX::new(45.0).draw(Some(&mut recorder));
        DrawableSkewX::new(-720.5).draw(Some(&mut recorder));
        DrawableSkewX::new(90.0).draw(Some(&mut recorder));

        assert_eq!(recorder.skews, vec![45.0, -720.5, 90.0]);
    }

    #[test]
    fn keeps_angle() {
        assert_eq!(DrawableSkewX::new(12.5).angle(), 12.5);
    }
}

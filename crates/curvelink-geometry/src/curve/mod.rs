//! Curve handles and the concrete curve families.

mod line;
mod circle;
mod ellipse;
mod bspline;
mod segment;

use curvelink_core::{ChainError, Result};
use curvelink_math::Point3;
use serde::{Deserialize, Serialize};

pub use line::Line;
pub use circle::Arc;
pub use ellipse::EllipseArc;
pub use bspline::BSplineCurve;
pub use segment::Segment;

/// One of the two ends of a bounded curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveEnd {
    Start,
    End,
}

/// Trait for parametric curves handed over by a geometry kernel.
///
/// A curve is either bound (it has a parameter interval and therefore two
/// endpoints) or unbound (a full periodic curve such as a circle).
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Parameter interval `(t_start, t_end)`, or `None` when the curve is unbound.
    fn bounds(&self) -> Option<(f64, f64)>;

    /// Restrict the curve to `[start, end]`.
    fn make_bound(&mut self, start: f64, end: f64) -> Result<()>;

    /// A copy running in the opposite direction, with the same bound state.
    fn reversed(&self) -> Self
    where
        Self: Sized;

    fn is_bound(&self) -> bool {
        self.bounds().is_some()
    }

    /// Endpoint of a bound curve; `None` when the curve is unbound.
    fn end_point(&self, end: CurveEnd) -> Option<Point3> {
        let (t0, t1) = self.bounds()?;
        Some(match end {
            CurveEnd::Start => self.point_at(t0),
            CurveEnd::End => self.point_at(t1),
        })
    }

    /// Whether the curve is closed (an unbound periodic curve).
    fn is_closed(&self) -> bool {
        false
    }

    /// Parameter period of periodic families.
    fn period(&self) -> Option<f64> {
        None
    }
}

pub(crate) fn check_bounds(start: f64, end: f64) -> Result<()> {
    if start.is_finite() && end.is_finite() && start < end {
        Ok(())
    } else {
        Err(ChainError::InvalidBounds { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(0.0, 1.0).is_ok());
        assert!(matches!(
            check_bounds(1.0, 1.0),
            Err(ChainError::InvalidBounds { .. })
        ));
        assert!(check_bounds(2.0, 1.0).is_err());
        assert!(check_bounds(0.0, f64::INFINITY).is_err());
        assert!(check_bounds(f64::NAN, 1.0).is_err());
    }
}

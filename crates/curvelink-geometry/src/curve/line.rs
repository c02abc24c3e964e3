//! Line segment curve.

use curvelink_core::Result;
use curvelink_math::Point3;
use serde::{Deserialize, Serialize};

use super::{check_bounds, Curve};

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3,
    pub end: Point3,
}

impl Line {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point3 {
        self.start + t * (self.end - self.start)
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((0.0, 1.0))
    }

    /// Trims (or extends) the segment so that `[start, end]` becomes the new `[0, 1]`.
    fn make_bound(&mut self, start: f64, end: f64) -> Result<()> {
        check_bounds(start, end)?;
        let (p0, p1) = (self.point_at(start), self.point_at(end));
        self.start = p0;
        self.end = p1;
        Ok(())
    }

    fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveEnd;
    use curvelink_math::DVec3;

    #[test]
    fn test_line_point_at() {
        let line = Line::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(2.0, 4.0, 6.0));
        let p = line.point_at(0.5);
        assert!((p.x - 1.0).abs() < 1e-10);
        assert!((p.y - 2.0).abs() < 1e-10);
        assert!((p.z - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_line_endpoints() {
        let line = Line::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, 5.0, 6.0));
        assert!(line.is_bound());
        assert_eq!(line.end_point(CurveEnd::Start), Some(line.start));
        assert_eq!(line.end_point(CurveEnd::End), Some(line.end));
    }

    #[test]
    fn test_line_reversed() {
        let line = Line::new(DVec3::ZERO, DVec3::X);
        let rev = line.reversed();
        assert_eq!(rev.start, DVec3::X);
        assert_eq!(rev.end, DVec3::ZERO);
        // original untouched
        assert_eq!(line.start, DVec3::ZERO);
    }

    #[test]
    fn test_line_make_bound_trims() {
        let mut line = Line::new(DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0));
        line.make_bound(0.25, 0.5).unwrap();
        assert!((line.start - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-10);
        assert!((line.end - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-10);
        assert!((line.length() - 1.0).abs() < 1e-10);
        assert!(line.make_bound(0.5, 0.5).is_err());
    }
}

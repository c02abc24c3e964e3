//! Clamped B-spline curve.

use curvelink_core::{ChainError, Result};
use curvelink_math::Point3;
use serde::{Deserialize, Serialize};

use super::{check_bounds, Curve};

/// A B-spline curve defined by degree, knot vector, and control points.
///
/// Splines coming out of a kernel are always bound over their knot domain.
/// Deserialized splines go through the same checks as [`BSplineCurve::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBSpline")]
pub struct BSplineCurve {
    pub degree: usize,
    pub knots: Vec<f64>,
    pub control_points: Vec<Point3>,
}

#[derive(Deserialize)]
struct RawBSpline {
    degree: usize,
    knots: Vec<f64>,
    control_points: Vec<Point3>,
}

impl TryFrom<RawBSpline> for BSplineCurve {
    type Error = ChainError;

    fn try_from(raw: RawBSpline) -> Result<Self> {
        Self::new(raw.degree, raw.knots, raw.control_points)
    }
}

impl BSplineCurve {
    pub fn new(degree: usize, knots: Vec<f64>, control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() <= degree {
            return Err(ChainError::Geometry(format!(
                "B-spline of degree {} needs at least {} control points, got {}",
                degree,
                degree + 1,
                control_points.len()
            )));
        }
        if knots.len() != control_points.len() + degree + 1 {
            return Err(ChainError::Geometry(format!(
                "Knot vector length must be n + p + 1, got {} knots for {} CPs with degree {}",
                knots.len(),
                control_points.len(),
                degree
            )));
        }
        if knots.windows(2).any(|w| w[1] < w[0]) {
            return Err(ChainError::Geometry(
                "Knot vector must be non-decreasing".to_string(),
            ));
        }
        Ok(Self {
            degree,
            knots,
            control_points,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        let p = self.degree;
        (self.knots[p], self.knots[self.knots.len() - p - 1])
    }

    /// Knot span index containing `t`, with the end of the domain mapped to the last span.
    fn find_span(&self, t: f64) -> usize {
        let p = self.degree;
        let n = self.control_points.len() - 1;
        (p..n)
            .find(|&k| t < self.knots[k + 1])
            .unwrap_or(n)
    }
}

impl Curve for BSplineCurve {
    /// De Boor evaluation.
    fn point_at(&self, t: f64) -> Point3 {
        let (t_min, t_max) = self.domain();
        let t = t.clamp(t_min, t_max);
        let p = self.degree;
        let k = self.find_span(t);

        let mut d: Vec<Point3> = (0..=p).map(|j| self.control_points[j + k - p]).collect();
        for r in 1..=p {
            for j in (r..=p).rev() {
                let i = j + k - p;
                let denom = self.knots[i + p + 1 - r] - self.knots[i];
                let alpha = if denom == 0.0 {
                    0.0
                } else {
                    (t - self.knots[i]) / denom
                };
                d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
            }
        }
        d[p]
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some(self.domain())
    }

    fn make_bound(&mut self, start: f64, end: f64) -> Result<()> {
        check_bounds(start, end)?;
        if (start, end) == self.domain() {
            return Ok(());
        }
        Err(ChainError::InvalidOperation(format!(
            "B-spline cannot be re-bound to [{start}, {end}]; split it in the host kernel"
        )))
    }

    fn reversed(&self) -> Self {
        let first = self.knots[0];
        let last = self.knots[self.knots.len() - 1];
        Self {
            degree: self.degree,
            knots: self.knots.iter().rev().map(|k| first + last - k).collect(),
            control_points: self.control_points.iter().rev().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurveEnd;
    use curvelink_math::DVec3;

    fn quadratic() -> BSplineCurve {
        BSplineCurve::new(
            2,
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.5, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bspline_quadratic() {
        let curve = quadratic();

        let p0 = curve.point_at(0.0);
        assert!((p0 - DVec3::new(0.0, 0.0, 0.0)).length() < 1e-10);

        let p1 = curve.point_at(1.0);
        assert!((p1 - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-10);

        // At t=0.5: 0.25*P0 + 0.5*P1 + 0.25*P2 = (0.5, 0.5, 0)
        let pm = curve.point_at(0.5);
        assert!((pm.x - 0.5).abs() < 1e-10);
        assert!((pm.y - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_bspline_interior_knots() {
        let curve = BSplineCurve::new(
            2,
            vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0],
            vec![
                DVec3::ZERO,
                DVec3::X,
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::Y,
                DVec3::new(0.0, 2.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(curve.domain(), (0.0, 3.0));
        let end = curve.end_point(CurveEnd::End).unwrap();
        assert!((end - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-10);
        // At an interior knot the curve sits on the midpoint of the two adjacent control points.
        let at_one = curve.point_at(1.0);
        assert!((at_one - DVec3::new(1.0, 0.5, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_bspline_reversed() {
        let curve = quadratic();
        let rev = curve.reversed();
        assert_eq!(rev.domain(), (0.0, 1.0));
        assert!((rev.point_at(0.0) - curve.point_at(1.0)).length() < 1e-10);
        assert!((rev.point_at(0.25) - curve.point_at(0.75)).length() < 1e-10);
    }

    #[test]
    fn test_bspline_rejects_bad_knots() {
        let err = BSplineCurve::new(2, vec![0.0, 1.0], vec![DVec3::ZERO; 3]).unwrap_err();
        assert!(matches!(err, ChainError::Geometry(_)));
        assert!(BSplineCurve::new(1, vec![0.0, 0.0, 1.0, 1.0], vec![DVec3::ZERO]).is_err());
    }

    #[test]
    fn test_bspline_deserialize_validates() {
        let json = serde_json::to_string(&quadratic()).unwrap();
        let back: BSplineCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quadratic());

        let empty = r#"{"degree":2,"knots":[],"control_points":[]}"#;
        let err = serde_json::from_str::<BSplineCurve>(empty).unwrap_err();
        assert!(err.to_string().contains("control points"), "{err}");

        let short = r#"{"degree":1,"knots":[0.0,1.0],"control_points":[[0.0,0.0,0.0],[1.0,0.0,0.0]]}"#;
        let err = serde_json::from_str::<BSplineCurve>(short).unwrap_err();
        assert!(err.to_string().contains("Knot vector length"), "{err}");
    }

    #[test]
    fn test_bspline_make_bound_only_accepts_domain() {
        let mut curve = quadratic();
        assert!(curve.make_bound(0.0, 1.0).is_ok());
        assert!(matches!(
            curve.make_bound(0.0, 0.5),
            Err(ChainError::InvalidOperation(_))
        ));
    }
}

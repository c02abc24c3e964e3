//! Heterogeneous curve handle.

use curvelink_core::Result;
use curvelink_math::Point3;
use serde::{Deserialize, Serialize};

use super::{Arc, BSplineCurve, Curve, EllipseArc, Line};

/// Any of the supported curve families, so a single group may mix them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Line(Line),
    Arc(Arc),
    Ellipse(EllipseArc),
    BSpline(BSplineCurve),
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Segment::Line($c) => $body,
            Segment::Arc($c) => $body,
            Segment::Ellipse($c) => $body,
            Segment::BSpline($c) => $body,
        }
    };
}

impl Curve for Segment {
    fn point_at(&self, t: f64) -> Point3 {
        dispatch!(self, c => c.point_at(t))
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        dispatch!(self, c => c.bounds())
    }

    fn make_bound(&mut self, start: f64, end: f64) -> Result<()> {
        dispatch!(self, c => c.make_bound(start, end))
    }

    fn reversed(&self) -> Self {
        match self {
            Segment::Line(c) => Segment::Line(c.reversed()),
            Segment::Arc(c) => Segment::Arc(c.reversed()),
            Segment::Ellipse(c) => Segment::Ellipse(c.reversed()),
            Segment::BSpline(c) => Segment::BSpline(c.reversed()),
        }
    }

    fn is_closed(&self) -> bool {
        dispatch!(self, c => c.is_closed())
    }

    fn period(&self) -> Option<f64> {
        dispatch!(self, c => c.period())
    }
}

impl From<Line> for Segment {
    fn from(c: Line) -> Self {
        Segment::Line(c)
    }
}

impl From<Arc> for Segment {
    fn from(c: Arc) -> Self {
        Segment::Arc(c)
    }
}

impl From<EllipseArc> for Segment {
    fn from(c: EllipseArc) -> Self {
        Segment::Ellipse(c)
    }
}

impl From<BSplineCurve> for Segment {
    fn from(c: BSplineCurve) -> Self {
        Segment::BSpline(c)
    }
}

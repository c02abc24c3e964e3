//! curvelink geometry: the curve handles fed to the chaining core.

pub mod curve;

pub use curve::{Arc, BSplineCurve, Curve, CurveEnd, EllipseArc, Line, Segment};

//! Elliptical arc curve.

use std::f64::consts::PI;

use curvelink_core::Result;
use curvelink_math::{DVec3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{check_bounds, Curve};

/// An elliptical arc in 3D space, or a full ellipse when unbound.
///
/// Defined by center, normal, major axis direction, and minor radius.
/// The major radius is the length of `major_axis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseArc {
    pub center: Point3,
    pub normal: Vector3,
    pub major_axis: Vector3,
    pub minor_radius: f64,
    pub bounds: Option<(f64, f64)>,
}

impl EllipseArc {
    /// An unbound full ellipse.
    pub fn full(center: Point3, normal: Vector3, major_axis: Vector3, minor_radius: f64) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            major_axis,
            minor_radius,
            bounds: None,
        }
    }

    pub fn new(
        center: Point3,
        normal: Vector3,
        major_axis: Vector3,
        minor_radius: f64,
        start: f64,
        end: f64,
    ) -> Result<Self> {
        let mut ellipse = Self::full(center, normal, major_axis, minor_radius);
        ellipse.make_bound(start, end)?;
        Ok(ellipse)
    }

    /// Major radius (length of major_axis).
    pub fn major_radius(&self) -> f64 {
        self.major_axis.length()
    }

    fn minor_axis(&self) -> DVec3 {
        self.normal.cross(self.major_axis).normalize()
    }
}

impl Curve for EllipseArc {
    fn point_at(&self, t: f64) -> Point3 {
        let u = self.major_axis;
        let v = self.minor_axis() * self.minor_radius;
        self.center + t.cos() * u + t.sin() * v
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    fn make_bound(&mut self, start: f64, end: f64) -> Result<()> {
        check_bounds(start, end)?;
        self.bounds = Some((start, end));
        Ok(())
    }

    fn reversed(&self) -> Self {
        Self {
            normal: -self.normal,
            bounds: self.bounds.map(|(a, b)| (-b, -a)),
            ..self.clone()
        }
    }

    fn is_closed(&self) -> bool {
        self.bounds.is_none()
    }

    fn period(&self) -> Option<f64> {
        Some(2.0 * PI)
    }
}
